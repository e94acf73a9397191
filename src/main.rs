use crossterm::event::{self, Event, KeyCode};
use crossterm::{cursor, execute, terminal};
use marubatsu_ai::core::Difficulty;
use marubatsu_ai::game::replay::ReplayViewer;
use marubatsu_ai::game::{Game, KifuData};
use marubatsu_ai::selfplay::{run_selfplay, SelfPlayConfig};
use marubatsu_ai::ui;
use std::io;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    loop {
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        print!("=== Marubatsu AI (Tic-Tac-Toe) ===\r\n");
        print!("\r\nSelect mode:\r\n");
        print!("1. Local Play\r\n");
        print!("2. Selfplay (AI vs AI batch)\r\n");
        print!("3. Replay Kifu\r\n");
        print!("q. Quit\r\n");

        let mode = loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('1') => break "local",
                        KeyCode::Char('2') => break "selfplay",
                        KeyCode::Char('3') => break "replay",
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                }
            }
        };

        let result = match mode {
            "selfplay" => run_selfplay_menu(),
            "replay" => run_replay(),
            _ => run_local(),
        };

        if let Err(e) = result {
            print!("\r\n[!] {}\r\n", e);
            std::thread::sleep(Duration::from_secs(1));
        }
    }
}

fn run_local() -> anyhow::Result<()> {
    print!("\r\nSelect players:\r\n");
    print!("1. Human vs Human\r\n");
    print!("2. Human vs Minimax AI (Easy)\r\n");
    print!("3. Human vs Minimax AI (Hard)\r\n");
    print!("4. Minimax AI vs Minimax AI\r\n");
    print!("5. Random AI vs Minimax AI\r\n");

    let p_choice = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break "1",
                    KeyCode::Char('2') => break "2",
                    KeyCode::Char('3') => break "3",
                    KeyCode::Char('4') => break "4",
                    KeyCode::Char('5') => break "5",
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    let (p1, p2) = ui::selection::create_player_controllers(p_choice)?;
    let mut game = Game::new();
    game.play(p1.as_ref(), p2.as_ref())
}

fn run_selfplay_menu() -> anyhow::Result<()> {
    print!("\r\n");
    let num_games = ui::read_input_raw("100", "Number of games")?
        .trim()
        .parse::<usize>()
        .unwrap_or(100);

    let ai_x_difficulty = select_difficulty("AI X")?;
    let ai_o_difficulty = select_difficulty("AI O")?;
    let save_kifus = confirm("Save kifus?")?;
    let parallel = confirm("Run in parallel?")?;

    print!("\r\nRunning {} games...\r\n", num_games);
    let stats = run_selfplay(SelfPlayConfig {
        num_games,
        ai_x_difficulty,
        ai_o_difficulty,
        save_kifus,
        parallel,
    })?;

    print!("\r\n--- Selfplay Result ---\r\n");
    print!(
        "Games: {}  X wins: {}  O wins: {}  Draws: {}\r\n",
        stats.total_games, stats.x_wins, stats.o_wins, stats.draws
    );
    print!(
        "Avg moves: {:.1}  Avg time: {:.1}ms\r\n",
        stats.avg_moves, stats.avg_time_ms
    );
    print!("\r\nPress any key to continue.\r\n");
    wait_any_key()?;
    Ok(())
}

fn run_replay() -> anyhow::Result<()> {
    let Some(path) = ui::select_kifu_file("selfplay_kifu")? else {
        return Ok(());
    };

    let file = std::fs::File::open(&path)?;
    let kifu: KifuData = serde_json::from_reader(file)?;
    ReplayViewer::new(kifu).run()
}

fn select_difficulty(label: &str) -> anyhow::Result<Difficulty> {
    print!("\r\n{} difficulty:\r\n", label);
    print!("1. Easy\r\n");
    print!("2. Hard\r\n");

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => return Ok(Difficulty::Easy),
                    KeyCode::Char('2') => return Ok(Difficulty::Hard),
                    KeyCode::Esc | KeyCode::Char('q') => {
                        return Err(anyhow::anyhow!("Canceled"));
                    }
                    _ => {}
                }
            }
        }
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("\r\n{} [y/n]\r\n", prompt);
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('y') => return Ok(true),
                    KeyCode::Char('n') => return Ok(false),
                    KeyCode::Esc | KeyCode::Char('q') => {
                        return Err(anyhow::anyhow!("Canceled"));
                    }
                    _ => {}
                }
            }
        }
    }
}

fn wait_any_key() -> anyhow::Result<()> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}
