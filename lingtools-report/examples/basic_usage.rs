//! Basic usage example for lingtools-report

use lingtools_core::ingest::read_stream;
use lingtools_report::{
    assemble_report, DetectedIssue, FramingMode, Language, ReportConfig, Result,
};

fn main() -> Result<()> {
    // Text as it arrives from an upload, in Latin-1 with Windows line endings
    let upload: &[u8] = b"Il y a un probl\xe8me;\r\nc'est tr\xe8s grave !\r\n";
    let text = read_stream(upload, Some("iso-8859-1"))?;
    println!("Decoded text: {text:?}");

    // Issues as a rule engine would report them
    let issues = vec![
        DetectedIssue::new(18..19, "Missing space before ';'", "FRENCH_WHITESPACE")
            .with_replacements([" ;"]),
        DetectedIssue::new(26..30, "Possible spelling mistake", "FR_SPELLING_RULE"),
    ];

    let config = ReportConfig::builder()
        .context_width(10)
        .language(Language::new("fr").with_name("French"))
        .secondary_language(Language::new("en").with_name("English"))
        .build()?;

    // Whole document at once
    println!("{}", assemble_report(&issues, &text, &config));

    // The same document streamed in two batches
    let head = assemble_report(&issues[..1], &text, &config.with_mode(FramingMode::Open));
    let tail = assemble_report(&issues[1..], &text, &config.with_mode(FramingMode::Close));
    print!("{head}{tail}");

    Ok(())
}
