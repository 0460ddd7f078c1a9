//! Node id generation

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Length of every generated id
pub const ID_LEN: usize = 16;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of node ids
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Base-36 milliseconds since the epoch followed by base-36 random
/// characters, cut to exactly [`ID_LEN`] characters
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        let mut id = to_base36(millis);
        let mut rng = rand::thread_rng();
        // 8 random characters, more if the clock part came up short
        let random = (ID_LEN - id.len().min(ID_LEN)).max(8);
        for _ in 0..random {
            id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
        }
        id.truncate(ID_LEN);
        id
    }
}

/// Deterministic ids (`n0000000000000001`, ...) for reproducible output
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("n{:0>width$}", self.counter, width = ID_LEN - 1)
    }
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
