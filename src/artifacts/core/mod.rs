//! Output helpers shared by the commands

use crate::config::Config;
use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter feeding a `minus` pager
///
/// Commands print to a boxed writer; handing them one of these instead of
/// stdout sends long output (such as `log`) through the pager.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page only when allowed and a human is looking at stdout
pub fn should_page(config: &Config) -> bool {
    config.pager && io::stdout().is_terminal()
}
