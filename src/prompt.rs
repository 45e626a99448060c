//! Interactive console prompt.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use vidtree::playlist::PlaylistSummary;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the XSPF playlist creator!\n")?;
        writeln!(
            self.output,
            "Type the path of the folder to scan, or press Enter to use the current folder.\n"
        )
    }

    /// Ask for the folder to scan. Empty input (or EOF) selects `current`.
    pub fn ask_folder(&mut self, current: &Path) -> io::Result<PathBuf> {
        write!(self.output, "Folder path: ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();

        if answer.is_empty() {
            writeln!(
                self.output,
                "\nNo path given. Using the current folder:\n{}\n",
                current.display()
            )?;
            Ok(current.to_path_buf())
        } else {
            writeln!(self.output, "\nYou entered:\n{}\n", answer)?;
            Ok(PathBuf::from(answer))
        }
    }

    pub fn report_success(&mut self, summary: &PlaylistSummary) -> io::Result<()> {
        writeln!(
            self.output,
            "Playlist created: {} ({} videos in {} folders)",
            summary.output.display(),
            summary.tracks,
            summary.folders
        )?;
        if summary.unknown_durations > 0 {
            writeln!(
                self.output,
                "Duration unknown for {} videos (written as -1)",
                summary.unknown_durations
            )?;
        }
        Ok(())
    }

    /// Block until a line (or EOF) arrives on the input.
    pub fn wait_for_ack(&mut self) -> io::Result<()> {
        write!(self.output, "Press Enter to exit...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}
