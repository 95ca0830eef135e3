//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Lattice Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# separator_thickness = 4        # 1-32; also the smallest draggable pane size
# default_split_fraction = 0.5   # 0.1-0.9; share kept by the pane being split
# focus_border_width = 1         # 0-8; 0 disables the focus border

[window]
# width = 100                    # 16-10000
# height = 100                   # 16-10000

[keybinds]
# split_horizontal = "Ctrl+H"
# split_vertical = "Ctrl+V"
# close_pane = "Ctrl+X"
# focus_next = "Ctrl+N"
# focus_prev = "Ctrl+P"

[document]
# welcome_url = "about:welcome"
# welcome_text = "Welcome to Lattice."

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
    .to_string()
}
