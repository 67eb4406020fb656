// PlayerKey
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct PlayerKey(u64);

impl PlayerKey {
    pub(crate) fn from_u64(value: u64) -> Self {
        PlayerKey(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}
