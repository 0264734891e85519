/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use rand::{thread_rng, Rng};

pub const PASSWORD_LEN: usize = 12;

const CLASSES: [&[u8]; 4] = [
    b"abcdefghijklmnopqrstuvwxyz",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    b"0123456789",
    b"!#$%&*+-=?@_",
];

/// Generates a random password of [`PASSWORD_LEN`] characters, each drawn
/// from a character class different from the previous pick.
pub fn generate() -> String {
    let mut rng = thread_rng();
    let mut password = String::with_capacity(PASSWORD_LEN);
    let mut last_class = None;

    for _ in 0..PASSWORD_LEN {
        let class = loop {
            let class = rng.gen_range(0..CLASSES.len());
            if Some(class) != last_class {
                break class;
            }
        };
        last_class = Some(class);

        let chars = CLASSES[class];
        password.push(char::from(chars[rng.gen_range(0..chars.len())]));
    }

    password
}
