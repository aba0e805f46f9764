//! Synthetic cell dictionary builder shared by the integration tests.
#![allow(dead_code)]

pub const MAGIC: u32 = 0x1540;

pub fn utf16(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    pub sequence: u16,
    pub unknown: [u16; 3],
}

impl Word {
    pub fn new(text: &str, sequence: u16) -> Self {
        Self {
            text: text.to_string(),
            sequence,
            unknown: [0, 0, 0],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    pub pinyin: Vec<u16>,
    pub words: Vec<Word>,
}

/// Builds a buffer laid out like a real `.scel` file.
#[derive(Debug, Clone)]
pub struct ScelBuilder {
    pub magic: u32,
    pub revision: u8,
    pub title: String,
    pub category: String,
    pub description: String,
    pub samples: String,
    pub total_words: Option<u32>,
    pub unknown_fields: [u32; 2],
    pub pinyin: Vec<(u16, String)>,
    pub records: Vec<Record>,
    /// Appended verbatim after the built records; each counts as one record.
    pub raw_records: Vec<(u32, Vec<u8>)>,
    pub deleted: Option<Vec<String>>,
    pub trailer: Vec<u8>,
}

impl Default for ScelBuilder {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            revision: 0x44,
            title: "测试词库".to_string(),
            category: "测试".to_string(),
            description: "synthetic".to_string(),
            samples: "你好 世界".to_string(),
            total_words: None,
            unknown_fields: [0, 0],
            pinyin: Vec::new(),
            records: Vec::new(),
            raw_records: Vec::new(),
            deleted: None,
            trailer: Vec::new(),
        }
    }
}

impl ScelBuilder {
    pub fn revision(mut self, revision: u8) -> Self {
        self.revision = revision;
        self
    }

    pub fn syllable(mut self, index: u16, text: &str) -> Self {
        self.pinyin.push((index, text.to_string()));
        self
    }

    pub fn record(mut self, pinyin: &[u16], words: Vec<Word>) -> Self {
        self.records.push(Record {
            pinyin: pinyin.to_vec(),
            words,
        });
        self
    }

    pub fn raw_record(mut self, bytes: Vec<u8>) -> Self {
        self.raw_records.push((1, bytes));
        self
    }

    pub fn deleted(mut self, words: &[&str]) -> Self {
        self.deleted = Some(words.iter().map(|w| w.to_string()).collect());
        self
    }

    pub fn word_section_offset(&self) -> usize {
        match self.revision {
            0x45 => 0x26c4,
            _ => 0x2628,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.word_section_offset()];
        buf[0..4].copy_from_slice(&self.magic.to_le_bytes());
        buf[4] = self.revision;

        let record_count = self.records.len() as u32
            + self.raw_records.iter().map(|(n, _)| n).sum::<u32>();
        let total_words = self.total_words.unwrap_or_else(|| {
            self.records.iter().map(|r| r.words.len() as u32).sum()
        });
        put(&mut buf, 0x120, &record_count.to_le_bytes());
        put(&mut buf, 0x124, &total_words.to_le_bytes());
        put(&mut buf, 0x128, &self.unknown_fields[0].to_le_bytes());
        put(&mut buf, 0x12c, &self.unknown_fields[1].to_le_bytes());
        put(&mut buf, 0x130, &utf16(&self.title));
        put(&mut buf, 0x338, &utf16(&self.category));
        put(&mut buf, 0x540, &utf16(&self.description));
        put(&mut buf, 0xd40, &utf16(&self.samples));

        let mut table = (self.pinyin.len() as u32).to_le_bytes().to_vec();
        for (index, text) in &self.pinyin {
            let encoded = utf16(text);
            table.extend_from_slice(&index.to_le_bytes());
            table.extend_from_slice(&(encoded.len() as u16).to_le_bytes());
            table.extend_from_slice(&encoded);
        }
        put(&mut buf, 0x1540, &table);

        for record in &self.records {
            buf.extend_from_slice(&(record.words.len() as u16).to_le_bytes());
            buf.extend_from_slice(&((record.pinyin.len() * 2) as u16).to_le_bytes());
            for index in &record.pinyin {
                buf.extend_from_slice(&index.to_le_bytes());
            }
            for word in &record.words {
                let encoded = utf16(&word.text);
                buf.extend_from_slice(&(encoded.len() as u16).to_le_bytes());
                buf.extend_from_slice(&encoded);
                buf.extend(info_block(word.sequence, word.unknown));
            }
        }
        for (_, raw) in &self.raw_records {
            buf.extend_from_slice(raw);
        }

        if let Some(deleted) = &self.deleted {
            buf.extend(utf16("DELTBL"));
            buf.extend_from_slice(&(deleted.len() as u16).to_le_bytes());
            for word in deleted {
                let units = word.encode_utf16().count() as u16;
                buf.extend_from_slice(&units.to_le_bytes());
                buf.extend(utf16(word));
            }
        }
        buf.extend_from_slice(&self.trailer);
        buf
    }
}

/// A standard 10-byte info block with its u16 length prefix.
pub fn info_block(sequence: u16, unknown: [u16; 3]) -> Vec<u8> {
    let mut out = 10u16.to_le_bytes().to_vec();
    for v in [sequence, 0].into_iter().chain(unknown) {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}
