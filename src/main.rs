//! Reads one request envelope from stdin and writes the response to stdout.
//!
//! Usage: `petmatch-skill [config.json] < envelope.json`

use petmatch_skill::{telemetry, Skill, SkillConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("[petmatch-skill] {e}");
        std::process::exit(1);
    }
}

async fn run() -> petmatch_skill::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SkillConfig::from_file(path)?,
        None => SkillConfig::default(),
    };

    telemetry::init(&config.logging)?;

    let skill = Skill::from_config(&config)?;

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;

    let output = skill.invoke_json(&input).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}
