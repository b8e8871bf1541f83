//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Pane Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[engine]
# source = "release"     # "release" or "local"
# version = "0.2.0"
# url = "https://github.com/denosaurs/pane/releases/download/0.2.0/"
# path = "/opt/pane/libpane.so"   # required when source = "local"
# cache = "store"        # "store" or "none"
#
# PANE_PLUGIN_URL (or PLUGIN_URL) overrides the source and disables the cache.

[logging]
# level = "info"         # trace, debug, info, warn, error

[window]
# width = 320            # 1-16384
# height = 240           # 1-16384
# title = "pane"

[event_loop]
# poll_interval_ms = 33  # 1-1000
"##
}
