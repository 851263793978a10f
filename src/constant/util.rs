pub(crate) enum SensitiveMode {
    /// do not show any char
    Full,
    /// keep at most this many chars visible, split between head and tail.
    /// a string not longer than this is fully hidden.
    Normal(usize),
}

/// # mask sensitive
///
/// convert secret from "something" to "so*****ng", so it can be logged or debug-printed.
///
/// ### Arguments
///
/// * `secret`: original string
/// * `mode`: how many chars may stay visible
pub(crate) fn mask_sensitive(secret: &str, mode: SensitiveMode) -> String {
    let len = secret.chars().count();
    let show_len = match mode {
        SensitiveMode::Full => 0,
        SensitiveMode::Normal(shown_len) => shown_len,
    };

    if len <= show_len {
        return "*".repeat(len);
    }

    let prefix_len = show_len / 2;
    let suffix_len = show_len - prefix_len;

    secret
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < prefix_len || i >= len - suffix_len {
                c
            } else {
                '*'
            }
        })
        .collect()
}
