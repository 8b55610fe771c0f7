use crate::common::*;

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorScheme {
    /// Colors used in order, wrapping around.
    Solid(&'static [Rgb]),
    /// Linear interpolation from the first to the last item.
    Gradient { from: Rgb, to: Rgb },
}

impl ColorScheme {
    #[doc = "Color of the `index`-th item out of `len` items"]
    pub fn color_at(&self, index: usize, len: usize) -> Rgb {
        match self {
            ColorScheme::Solid(colors) => {
                if colors.is_empty() {
                    (255, 255, 255)
                } else {
                    colors[index % colors.len()]
                }
            }
            ColorScheme::Gradient { from, to } => {
                let ratio: f64 = if len <= 1 {
                    0.0
                } else {
                    index.min(len - 1) as f64 / (len - 1) as f64
                };
                (
                    lerp_channel(from.0, to.0, ratio),
                    lerp_channel(from.1, to.1, ratio),
                    lerp_channel(from.2, to.2, ratio),
                )
            }
        }
    }
}

fn lerp_channel(from: u8, to: u8, ratio: f64) -> u8 {
    let value: f64 = from as f64 + (to as f64 - from as f64) * ratio;
    value.round().clamp(0.0, 255.0) as u8
}
