use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, terminal,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

pub mod selection;

/// rawモードでの1行入力
pub fn read_input_raw(default: &str, prompt: &str) -> anyhow::Result<String> {
    print!("{}: (Default: {}) \r\n> ", prompt, default);
    io::stdout().flush()?;

    let mut input = String::new();
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Enter => {
                        print!("\r\n");
                        if input.is_empty() {
                            return Ok(default.to_string());
                        } else {
                            return Ok(input);
                        }
                    }
                    KeyCode::Char(c) => {
                        input.push(c);
                        print!("{}", c);
                        io::stdout().flush()?;
                    }
                    KeyCode::Backspace => {
                        if !input.is_empty() {
                            input.pop();
                            print!("\u{0008} \u{0008}");
                            io::stdout().flush()?;
                        }
                    }
                    KeyCode::Esc => {
                        return Err(anyhow::anyhow!("Canceled"));
                    }
                    _ => {}
                }
            }
        }
    }
}

/// 棋譜ファイル選択 (↑/↓ + Enter)
pub fn select_kifu_file(dir: &str) -> anyhow::Result<Option<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        print!("\r\nNo kifu files found in '{}/'.\r\n", dir);
        print!("Run a selfplay batch with kifu saving first.\r\n");
        std::thread::sleep(Duration::from_secs(2));
        return Ok(None);
    }

    // 新しいものを先頭に
    files.sort();
    files.reverse();

    let mut selected = 0usize;
    loop {
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        print!("Select kifu (Use ↑/↓ and Enter, q to cancel):\r\n\r\n");
        for (i, path) in files.iter().enumerate() {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("(invalid)");
            if i == selected {
                print!("> {}\r\n", name);
            } else {
                print!("  {}\r\n", name);
            }
        }
        io::stdout().flush()?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up => {
                        selected = selected.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if selected + 1 < files.len() {
                            selected += 1;
                        }
                    }
                    KeyCode::Enter => return Ok(Some(files[selected].clone())),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}
