//! JSONL log of dealt games, written by the game commands' `--output` flag.
//!
//! One record per line, LF-terminated. Opening an existing log appends to it
//! and continues the deal numbering after the records already present, so
//! ids stay unique within one file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cardplay_engine::cards::Card;
use cardplay_engine::game::AllHands;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One complete deal as stored in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    /// `YYYYMMDD-NNNNNN`: date the log was opened and position in the file
    pub deal_id: String,
    /// Engine name of the game that dealt the cards
    pub game: String,
    /// Seed of the generator the whole command ran with
    pub seed: u64,
    pub hands: AllHands<Card>,
    /// RFC3339, UTC
    pub ts: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}

pub fn format_deal_id(yyyymmdd: &str, seq: usize) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct DealLog {
    writer: BufWriter<File>,
    date: String,
    seq: usize,
}

impl DealLog {
    /// Opens `path` for appending, creating it and its parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let seq = existing_records(path)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq,
        })
    }

    /// Writes one deal and returns the id it was logged under.
    pub fn append(
        &mut self,
        game: &str,
        seed: u64,
        hands: AllHands<Card>,
        meta: serde_json::Value,
    ) -> io::Result<String> {
        self.seq += 1;
        let record = DealRecord {
            deal_id: format_deal_id(&self.date, self.seq),
            game: game.to_string(),
            seed,
            hands,
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            meta,
        };
        let line = serde_json::to_string(&record).map_err(io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(record.deal_id)
    }
}

fn existing_records(path: &Path) -> io::Result<usize> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.lines().filter(|l| !l.trim().is_empty()).count()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardplay_engine::cards::{Suit, Value};

    fn hands() -> AllHands<Card> {
        vec![
            vec![Card::new(Suit::Hearts, Value::Ace)],
            vec![Card::new(Suit::Clubs, Value::King)],
        ]
    }

    #[test]
    fn deal_ids_are_zero_padded() {
        assert_eq!(format_deal_id("20251017", 12), "20251017-000012");
    }

    #[test]
    fn writes_jsonl_with_lf_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.jsonl");
        let mut log = DealLog::open(&path).unwrap();
        log.append("pick", 1, hands(), serde_json::Value::Null).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.ends_with(b"\n"));
        assert!(!bytes.contains(&b'\r'));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/deals.jsonl");
        let mut log = DealLog::open(&path).unwrap();
        log.append("pick", 1, hands(), serde_json::Value::Null).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn reopening_appends_and_continues_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.jsonl");

        let mut first = DealLog::open(&path).unwrap();
        let a = first.append("pick", 1, hands(), serde_json::Value::Null).unwrap();
        let b = first.append("pick", 1, hands(), serde_json::Value::Null).unwrap();
        drop(first);
        let mut second = DealLog::open(&path).unwrap();
        let c = second.append("pick", 2, hands(), serde_json::Value::Null).unwrap();

        assert!(a.ends_with("-000001"));
        assert!(b.ends_with("-000002"));
        assert!(c.ends_with("-000003"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn records_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.jsonl");
        let mut log = DealLog::open(&path).unwrap();
        let id = log
            .append("piece-wise", 7, hands(), serde_json::json!({"round": 1}))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let back: DealRecord = serde_json::from_str(content.trim_end()).unwrap();
        assert_eq!(back.deal_id, id);
        assert_eq!(back.game, "piece-wise");
        assert_eq!(back.seed, 7);
        assert_eq!(back.hands, hands());
        assert_eq!(back.meta["round"], 1);
        assert!(chrono::DateTime::parse_from_rfc3339(&back.ts).is_ok());
    }
}
