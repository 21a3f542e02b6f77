use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that writes deck documents into a temp directory
struct TestFixture {
    _temp_dir: TempDir,
    dir: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    fn write_deck(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, content).expect("Failed to write deck file");
        path
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("slipdeck").expect("Failed to find slipdeck binary");
        // Point config at the empty temp dir so the host's real
        // config never leaks into a test.
        cmd.arg("--config").arg(self.dir.join("config.toml"));
        cmd
    }
}

const SAMPLE_DECK: &str = r#"{
    "meta": { "title": "Quarterly Review", "author": "Ana" },
    "slides": [
        { "type": "title", "headline": "Quarterly Review", "bullets": ["Q3", "2026"], "note": "Welcome everyone" },
        { "type": "section", "headline": "Results" },
        { "type": "content", "headline": "Revenue", "bullets": ["Up 12%", "Churn flat"] },
        { "type": "beforeAfter", "headline": "Pipeline",
          "left": { "title": "Then", "bullets": ["manual"] },
          "right": { "title": "Now", "bullets": ["automated"] } },
        { "type": "closing", "headline": "Thanks" }
    ]
}"#;

#[test]
fn outline_lists_slides_in_order() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", SAMPLE_DECK);

    fixture
        .command()
        .arg("outline")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quarterly Review"))
        .stdout(predicate::str::contains("5 slides"))
        .stdout(predicate::str::contains("Revenue"))
        .stdout(predicate::str::contains("beforeAfter"));
}

#[test]
fn show_plain_renders_the_requested_slide() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", SAMPLE_DECK);

    fixture
        .command()
        .arg("show")
        .arg(&deck)
        .arg("--slide")
        .arg("3")
        .arg("--height")
        .arg("900")
        .assert()
        .success()
        .stdout(predicate::str::contains("Revenue"))
        .stdout(predicate::str::contains("• Up 12%"))
        .stdout(predicate::str::contains("[3 / 5]"));
}

#[test]
fn show_echoes_the_speaker_note_to_stderr_only() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", SAMPLE_DECK);

    fixture
        .command()
        .arg("show")
        .arg(&deck)
        .arg("--slide")
        .arg("1")
        .arg("--height")
        .arg("900")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome everyone").not())
        .stderr(predicate::str::contains(
            "Speaker note (slide 1/5): Welcome everyone",
        ));
}

#[test]
fn show_json_emits_the_frame_structure() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", SAMPLE_DECK);

    fixture
        .command()
        .arg("show")
        .arg(&deck)
        .arg("--slide")
        .arg("2")
        .arg("--format")
        .arg("json")
        .arg("--height")
        .arg("900")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"window_title\": \"Quarterly Review\""))
        .stdout(predicate::str::contains("\"label\": \"2 of 5\""))
        .stdout(predicate::str::contains("\"kind\": \"headline\""));
}

#[test]
fn show_html_escapes_markup_in_slide_text() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck(
        "deck.json",
        r#"{ "slides": [ { "type": "content", "headline": "use <b>bold</b> & more" } ] }"#,
    );

    fixture
        .command()
        .arg("show")
        .arg(&deck)
        .arg("--format")
        .arg("html")
        .arg("--height")
        .arg("900")
        .assert()
        .success()
        .stdout(predicate::str::contains("use &lt;b&gt;bold&lt;/b&gt; &amp; more"))
        .stdout(predicate::str::contains("<b>bold</b>").not());
}

#[test]
fn show_compact_height_changes_the_density_tier() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", SAMPLE_DECK);

    fixture
        .command()
        .arg("show")
        .arg(&deck)
        .arg("--slide")
        .arg("2")
        .arg("--format")
        .arg("json")
        .arg("--height")
        .arg("700")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"density\": \"compact\""));
}

#[test]
fn show_rejects_a_slide_number_past_the_deck() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", SAMPLE_DECK);

    fixture
        .command()
        .arg("show")
        .arg(&deck)
        .arg("--slide")
        .arg("9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no slide 9"));
}

#[test]
fn missing_deck_prints_the_instructional_fallback() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("outline")
        .arg(fixture.dir.join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load the deck."))
        .stderr(predicate::str::contains("failed to read deck file"));
}

#[test]
fn invalid_json_fails_with_a_parse_error() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", "{ not json");

    fixture
        .command()
        .arg("outline")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse deck file"));
}

#[test]
fn empty_slides_array_is_rejected_at_load() {
    let fixture = TestFixture::new();
    let deck = fixture.write_deck("deck.json", r#"{ "slides": [] }"#);

    fixture
        .command()
        .arg("outline")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck contains no slides"));
}

#[test]
fn help_names_every_subcommand() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("outline"));
}
