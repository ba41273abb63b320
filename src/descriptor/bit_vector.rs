
/// Fixed-length bit vector stored in 64-bit blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct BitVector {
    data: Vec<u64>,
    bits: usize
}

impl BitVector {

    pub fn zeros(bits: usize) -> BitVector {
        assert!(bits > 0);
        let blocks = (bits + 63) / 64;

        BitVector { data: vec![0; blocks], bits }
    }

    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn set(&mut self, bit_idx: usize) -> () {
        assert!(bit_idx < self.bits);
        self.data[bit_idx / 64] |= 1u64 << (bit_idx % 64);
    }

    pub fn get(&self, bit_idx: usize) -> bool {
        assert!(bit_idx < self.bits);
        self.data[bit_idx / 64] & (1u64 << (bit_idx % 64)) != 0
    }

    /// Number of differing bit positions. Only meaningful for vectors built
    /// against the same sampling pattern.
    pub fn hamming_distance(&self, other: &BitVector) -> u64 {
        assert_eq!(self.bits, other.bits);

        self.data.iter()
            .zip(other.data.iter())
            .fold(0u64, |acc, (a, b)| acc + (a ^ b).count_ones() as u64)
    }
}
