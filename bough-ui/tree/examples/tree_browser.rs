//! Plain-text tree browser driven from stdin.
//!
//! Usage: `cargo run --example tree_browser -- [tree.json] [config.json]`
//!
//! Commands: `select <name>`, `clear`, `in`, `out`, `back <depth>`,
//! `open <a/b/c>`, `mode column|nested`, `quit`.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use bough_ui_tree::{
    Mode, NavigationError, NavigationView, Payload, RenderAdapter,
    RenderConfig, Tree, TreeNavigator, TreePath,
};
use env_logger::Env;

const SAMPLE_TREE: &str = r#"[
    {
        "name": "compute",
        "children": [
            { "name": "clusters", "children": [{ "name": "east" }, { "name": "west" }] },
            { "name": "images" }
        ]
    },
    { "name": "storage", "children": [{ "name": "volumes" }] },
    { "name": "billing" }
]"#;

struct TextRenderer;

impl RenderAdapter<Payload> for TextRenderer {
    type Output = String;

    fn render(
        &mut self,
        view: &NavigationView<'_, Payload>,
        config: &RenderConfig,
    ) -> String {
        let mut out = String::new();
        match view {
            NavigationView::Column(column) => {
                if let Some(crumb) = column.breadcrumb() {
                    out.push_str(&format!(
                        "{} {crumb}\n",
                        config.column.previous_icon
                    ));
                }
                for node in column.level {
                    let marker = if column
                        .selected
                        .is_some_and(|selected| std::ptr::eq(selected, node))
                    {
                        '*'
                    } else {
                        ' '
                    };
                    out.push_str(&format!("{marker} {}", node.name()));
                    if let Some(label) = config.sub_resources_label(node) {
                        out.push_str(&format!(
                            "  {label} {}",
                            config.column.next_icon
                        ));
                    }
                    out.push('\n');
                }
            },
            NavigationView::Nested(nested) => {
                for row in &nested.rows {
                    let marker = if row.highlighted { '*' } else { ' ' };
                    out.push_str(&format!(
                        "{marker} {}{} {}\n",
                        config.nested_indent(row),
                        config.nested_icon(row),
                        row.entry.node.name()
                    ));
                }
            },
        }
        out
    }
}

fn apply(
    navigator: &mut TreeNavigator,
    line: &str,
) -> Result<bool, NavigationError> {
    let (command, argument) = match line.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };
    match command {
        "select" => navigator.select(Some(argument))?,
        "clear" => navigator.select(None)?,
        "in" => navigator.drill_in()?,
        "out" => navigator.drill_out()?,
        "back" => match argument.parse() {
            Ok(depth) => navigator.drill_out_to(depth)?,
            Err(_) => eprintln!("back expects a depth"),
        },
        "open" => {
            let path: TreePath =
                argument.split('/').map(str::to_owned).collect();
            navigator.activate(&path)?;
        },
        "mode" => match argument {
            "column" => navigator.set_mode(Mode::Column),
            "nested" => navigator.set_mode(Mode::Nested),
            other => eprintln!("unknown mode: {other}"),
        },
        "quit" => return Ok(false),
        "" => {},
        other => eprintln!("unknown command: {other}"),
    }
    Ok(true)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args().skip(1);
    let tree: Tree = match args.next() {
        Some(path) => Tree::load(path)?,
        None => Tree::from_json(SAMPLE_TREE)?,
    };
    let config = args
        .next()
        .map(RenderConfig::load_or_default)
        .unwrap_or_default();

    let mut navigator = TreeNavigator::create(Arc::new(tree), config.mode);
    let mut renderer = TextRenderer;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", renderer.render(&navigator.view(), &config));
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match apply(&mut navigator, line.trim()) {
            Ok(true) => {},
            Ok(false) => break,
            Err(err) => log::warn!("{err}"),
        }
        print!("{}", renderer.render(&navigator.view(), &config));
        stdout.flush()?;
    }
    Ok(())
}
