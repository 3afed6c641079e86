use std::io::{self, Write};

use zapmsg_core::Beeper;

/// Rings the terminal bell (BEL).
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Beeper for TerminalBell {
    fn beep(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}
