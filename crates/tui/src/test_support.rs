use adminshell_util::ShellConfig;
use ratatui::buffer::Buffer;

use crate::app::App;
use crate::ui::theme::{LoadedTheme, catalog};

/// App with the default configuration and the default truecolor theme,
/// independent of the environment.
pub(crate) fn test_app() -> App {
    let definition = catalog::default_truecolor();
    App::new(
        ShellConfig::default(),
        LoadedTheme {
            definition,
            theme: definition.build(),
        },
    )
}

/// Buffer contents as one string per row.
pub(crate) fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
