//! Level command implementation

use anyhow::Result;

use verse_quest::progress::PlayerLevel;

/// Show level and progress for an XP total
pub fn level_command(xp: u64, json: bool) -> Result<()> {
    let player = PlayerLevel::new(xp);

    if json {
        println!("{}", serde_json::to_string_pretty(&player)?);
        return Ok(());
    }

    println!("Level {} ({} XP)", player.level, player.total_xp);
    println!(
        "  Progress: {}/{} ({:.0}%)",
        player.earned_in_level(),
        player.needed_for_level(),
        player.progress_fraction() * 100.0
    );
    println!(
        "  Next level at {} XP ({} to go)",
        player.next_level_xp,
        player.xp_to_next()
    );

    Ok(())
}
