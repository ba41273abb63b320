use crate::Float;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ImageEncoding {
    U8,
    F64
}

impl ImageEncoding {
    pub fn normalize_to_gray(&self, max: Float, min: Float, value: Float) -> u8 {
        let range = 255 as Float;
        if max == min {
            return 0;
        }
        ((value - min) * (range / (max - min))) as u8
    }
}
