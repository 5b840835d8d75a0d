use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use lifelike::{Board, Pos2};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Draws the live cells of a board into the terminal
pub struct ConsoleRender {
    tl: Pos2,
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            tl: Pos2::default(),
            report: String::new(),
        })
    }

    pub fn render(&self, board: &Board) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // leave the last row for the footer
        let visible_x = self.tl.x..self.tl.x + cols as i32;
        let visible_y = self.tl.y..self.tl.y + rows as i32 - 1;

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in board.alive() {
            if !visible_x.contains(&cell.x) || !visible_y.contains(&cell.y) {
                continue;
            }
            let cell = cell - self.tl;
            queue!(stdout, cursor::MoveTo(cell.x as u16, cell.y as u16))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure an event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            // arrows scroll the view
            event::Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Up => self.tl.y -= 1,
                KeyCode::Down => self.tl.y += 1,
                KeyCode::Left => self.tl.x -= 1,
                KeyCode::Right => self.tl.x += 1,
                _ => {}
            },
            _ => {}
        }
        outp
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // nothing sensible to do if the terminal refuses to be restored
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show);
    }
}
