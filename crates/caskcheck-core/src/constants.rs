//! Stanza vocabulary of the cask DSL

/// Name of the block describing how upstream releases are detected
pub const LIVECHECK: &str = "livecheck";

/// Conditional blocks that scope stanzas to a CPU architecture, an OS
/// family or a macOS release (optionally widened with `:or_older` /
/// `:or_newer`)
pub const ON_SYSTEM_METHODS: &[&str] = &[
    "on_arm",
    "on_intel",
    "on_macos",
    "on_linux",
    "on_tahoe",
    "on_sequoia",
    "on_sonoma",
    "on_ventura",
    "on_monterey",
    "on_big_sur",
    "on_catalina",
    "on_mojave",
    "on_high_sierra",
    "on_sierra",
    "on_el_capitan",
];

/// Top-level stanzas, grouped in their canonical order
pub const STANZA_GROUPS: &[&[&str]] = &[
    &["arch", "on_arch_conditional", "os"],
    &["version", "sha256"],
    ON_SYSTEM_METHODS,
    &["language"],
    &["url", "appcast", "name", "desc", "homepage"],
    &[LIVECHECK],
    &["deprecate!", "disable!"],
    &["auto_updates", "conflicts_with", "depends_on", "container"],
    &[
        "suite",
        "app",
        "pkg",
        "installer",
        "binary",
        "bash_completion",
        "fish_completion",
        "zsh_completion",
        "manpage",
        "colorpicker",
        "dictionary",
        "font",
        "input_method",
        "internet_plugin",
        "keyboard_layout",
        "prefpane",
        "qlplugin",
        "mdimporter",
        "screen_saver",
        "service",
        "audio_unit_plugin",
        "vst_plugin",
        "vst3_plugin",
        "artifact",
        "stage_only",
    ],
    &["preflight"],
    &["postflight"],
    &["uninstall_preflight"],
    &["uninstall_postflight"],
    &["uninstall"],
    &["zap"],
    &["caveats"],
];

/// All known top-level stanza names in canonical order
pub fn stanza_order() -> impl Iterator<Item = &'static str> {
    STANZA_GROUPS.iter().flat_map(|group| group.iter().copied())
}

/// Whether `name` is a top-level stanza.
///
/// Every `on_*` invocation is treated as a conditional block, so releases
/// newer than the ones listed in [`ON_SYSTEM_METHODS`] are still picked up
/// as stanzas.
pub fn is_stanza_name(name: &str) -> bool {
    name.starts_with("on_") || stanza_order().any(|stanza| stanza == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// macOS releases that have an `on_<release>` block, newest first
    const MACOS_RELEASES: &[&str] = &[
        "tahoe",
        "sequoia",
        "sonoma",
        "ventura",
        "monterey",
        "big_sur",
        "catalina",
        "mojave",
        "high_sierra",
        "sierra",
        "el_capitan",
    ];

    #[test]
    fn every_release_has_a_conditional_block() {
        for release in MACOS_RELEASES {
            let method = format!("on_{release}");
            assert!(ON_SYSTEM_METHODS.contains(&method.as_str()), "{method}");
        }
    }

    #[test]
    fn stanza_order_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for stanza in stanza_order() {
            assert!(seen.insert(stanza), "duplicate stanza {stanza}");
        }
    }

    #[test]
    fn recognizes_stanzas() {
        assert!(is_stanza_name("url"));
        assert!(is_stanza_name("livecheck"));
        assert!(is_stanza_name("on_ventura"));
        assert!(is_stanza_name("on_someday"));
        assert!(!is_stanza_name("arch_suffix"));
        assert!(!is_stanza_name("system_command"));
    }
}
