use uuid::Uuid;

/// Supplies the opaque `guid` tokens written for every node and connection.
///
/// Tokens never take part in wiring; connections reference nodes by arena index.
/// A deterministic source makes repeated conversions byte-identical.
pub trait GuidSource {
    fn next_guid(&mut self) -> String;
}

/// Random version 4 UUIDs, as the editor generates them.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomGuids;

impl GuidSource for RandomGuids {
    fn next_guid(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// UUID-shaped tokens derived from a counter.
#[derive(Debug, Default, Clone)]
pub struct SequentialGuids {
    next: u128,
}

impl SequentialGuids {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuidSource for SequentialGuids {
    fn next_guid(&mut self) -> String {
        self.next += 1;
        Uuid::from_u128(self.next).to_string()
    }
}
