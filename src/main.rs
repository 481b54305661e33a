use std::io;

use chrono::Utc;

use wayfarer::game_logic::handle_input;
use wayfarer::ui::Console;
use wayfarer::{build_info, Game, SaveManager};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "wayfarer {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Wayfarer - Turn-Based Text Adventure\n");
                println!("Usage: wayfarer\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'wayfarer --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let saves = SaveManager::new()?;
    let mut game = Game::new();
    let mut console = Console::new();
    let mut rng = rand::thread_rng();

    while game.running {
        let now = Utc::now().timestamp();
        game.player.decay_effects(now);

        console.clear()?;
        console.print_lines(&game.scene.render(&game.player))?;

        let Some(input) = console.read_line("> ")? else {
            break; // stdin closed
        };

        let messages = handle_input(&mut game, &saves, &input, now, &mut rng);
        if !messages.is_empty() {
            console.print_lines(&messages)?;
            console.pause()?;
        }
    }

    Ok(())
}
