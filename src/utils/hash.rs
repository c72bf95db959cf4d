// Fri Oct 16 2026 - Alex

pub struct HashComputer;

impl HashComputer {
    /// Compute FNV-1a hash (64-bit)
    pub fn fnv1a_64(data: &[u8]) -> u64 {
        const FNV_PRIME: u64 = 0x00000100000001B3;
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;

        let mut hash = FNV_OFFSET;
        for byte in data {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }

    pub fn fnv1a_64_hex(data: &[u8]) -> String {
        format!("{:016x}", Self::fnv1a_64(data))
    }
}
