//! Score history and its JSON persistence.
//!
//! The board is append-only: [`ScoreBoard::top`] truncates for display, but
//! every finished session stays in the history so totals and averages cover
//! the full record. The saved object is a serialization of the
//! [`ScoreBoard`] in JSON format by using [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{remove_file, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// How many entries the leaderboard view shows.
pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub game_name: String,
    pub points: i64,
    pub timestamp: SystemTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    records: Vec<ScoreRecord>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        ScoreBoard::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Append a result for the named game, stamped with the current time.
    pub fn record(&mut self, game_name: &str, points: i64) {
        self.push(ScoreRecord {
            game_name: game_name.to_string(),
            points,
            timestamp: SystemTime::now(),
        });
    }

    pub fn push(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Best `n` entries, highest points first. Ties keep insertion order.
    pub fn top(&self, n: usize) -> Vec<&ScoreRecord> {
        let mut sorted: Vec<&ScoreRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.points.cmp(&a.points));
        sorted.truncate(n);
        sorted
    }

    pub fn total(&self) -> i64 {
        self.records.iter().map(|r| r.points).sum()
    }

    /// Mean points over the whole history, not just the leaderboard view.
    pub fn average(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.total() as f64 / self.records.len() as f64
        }
    }

    pub fn best(&self) -> Option<i64> {
        self.records.iter().map(|r| r.points).max()
    }
}

/// Object to save and restore a score board.
pub struct ScoreSaver {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl ScoreSaver {
    /// Create a [`ScoreSaver`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the scores
    /// must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("scores.json");
        debug!("Score file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved [`ScoreBoard`].
    ///
    /// A missing save file is not an error: it yields an empty board.
    pub fn load(&self) -> Result<ScoreBoard, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(ScoreBoard::new()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let board: ScoreBoard = serde_json::from_reader(reader)?;
        Ok(board)
    }

    /// Save the provided [`ScoreBoard`] object.
    pub fn save(&self, board: &ScoreBoard) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, board)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the score file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_sorts_and_truncates() {
        let mut board = ScoreBoard::new();
        for (i, points) in [40, 10, 90, 60].iter().enumerate() {
            board.record(&format!("game-{i}"), *points);
        }
        let top = board.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].points, 90);
        assert_eq!(top[1].points, 60);
        // history is untouched
        assert_eq!(board.len(), 4);
        assert_eq!(board.total(), 200);
        assert_eq!(board.average(), 50.0);
        assert_eq!(board.best(), Some(90));
    }

    #[test]
    fn leaderboard_view_is_capped() {
        let mut board = ScoreBoard::new();
        for points in 0..15 {
            board.record("Arithmetic Game", points);
        }
        assert_eq!(board.top(LEADERBOARD_SIZE).len(), LEADERBOARD_SIZE);
        assert_eq!(board.len(), 15);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("math_drill_scores_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let saver = ScoreSaver::new(dir.clone());
        saver.delete_save();

        // missing file loads as an empty board
        let empty = saver.load().unwrap();
        assert!(empty.is_empty());

        let mut board = ScoreBoard::new();
        board.record("Trust Issue", 48);
        board.record("Broken Geometry", 150);
        saver.save(&board).unwrap();

        let restored = saver.load().unwrap();
        assert_eq!(restored.records(), board.records());

        saver.delete_save();
        let _ = std::fs::remove_dir(&dir);
    }
}
