pub mod args;
pub mod mount;
pub mod script;

use std::fs::{self, File};
use std::io::{self, Write};

use anyhow::{Context, Result};
use datagrid::{GridPage, Notifier, Region};
use simplelog::{Config, LevelFilter, WriteLogger};

pub use args::Cli;
use script::Session;

pub fn run(cli: Cli) -> Result<()> {
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(LevelFilter::from(cli.log_level), Config::default(), log_file)
        .context("failed to initialize logger")?;
    log::info!("[cli] log level {}", cli.log_level);

    let page = fs::read_to_string(&cli.page)
        .with_context(|| format!("failed to read {}", cli.page.display()))?;
    let script = cli
        .events
        .as_ref()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        })
        .transpose()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&page, script.as_deref(), cli.region.map(Region::from), &mut out)
}

/// Mount the page, replay the script and write the resulting markup followed
/// by one JSON line per dispatched notification.
pub fn execute(
    page: &str,
    script: Option<&str>,
    region: Option<Region>,
    out: &mut impl Write,
) -> Result<()> {
    let document = mount::parse_page(page).context("invalid page description")?;
    let mut session = Session::new(GridPage::mount(&document, Notifier::recording()));

    if let Some(script) = script {
        let steps = script::parse_script(script).context("invalid event script")?;
        log::info!("[cli] replaying {} step(s)", steps.len());
        session.run(&steps)?;
    }

    let page = session.into_page();
    for grid in page.instances() {
        let html = match region {
            Some(region) => grid.region_html(region),
            None => grid.to_html(),
        };
        writeln!(out, "{html}")?;
    }
    for notification in page.notifier().drain() {
        writeln!(out, "{}", serde_json::to_string(&notification)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"[
        {"table": "users",
         "items": [{"id": 7, "name": "Bold"}, {"id": 8, "name": "Bat"}],
         "columns": [{"key": "name", "label": "Name", "sortable": true}]},
        {"table": "rooms", "items": "not json"}
    ]"#;

    fn output(script: Option<&str>, region: Option<Region>) -> String {
        let mut out = Vec::new();
        execute(PAGE, script, region, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_every_grid() {
        let text = output(None, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(r#"<div id="users-grid""#));
        assert!(lines[1].contains("No data"));
    }

    #[test]
    fn prints_region_only() {
        let text = output(None, Some(Region::Counts));
        assert!(text.starts_with(r#"<span id="users-counts" class="table-count">"#));
    }

    #[test]
    fn prints_notifications_as_json_lines() {
        let script = r#"[
            {"step": "search", "table": "users", "query": "bold"},
            {"step": "open_menu", "table": "users", "row": 0},
            {"step": "delete", "table": "users"}
        ]"#;
        let text = output(Some(script), Some(Region::Menu));
        let last = text.lines().next_back().unwrap();
        assert_eq!(last, r#"{"kind":"delete","table":"users","record_id":7}"#);
    }

    #[test]
    fn bad_script_is_an_error() {
        let mut out = Vec::new();
        let err = execute(PAGE, Some(r#"[{"step": "dance"}]"#), None, &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid event script"));
    }

    #[test]
    fn failing_step_names_its_position() {
        let mut out = Vec::new();
        let script = r#"[{"step": "wait_ms", "ms": 5}, {"step": "edit", "table": "ghosts"}]"#;
        let err = execute(PAGE, Some(script), None, &mut out).unwrap_err();
        assert!(err.to_string().starts_with("step 2"));
    }
}
