use core::ops::Range;

use crate::builder::Barcode;
use crate::error::{Error, Result};

/// Lays a [Barcode] out over a `width × height` pixel surface, every module
/// being `width / module_count` pixels wide and the barcode centered
/// horizontally.
#[derive(Debug, Clone)]
pub struct BarcodeRender<'a> {
    barcode: &'a Barcode,
    width: u32,
    height: u32,
    bar_width: u32,
    offset: u32,
    inverted: bool
}

impl<'a> BarcodeRender<'a> {
    /// Fails with [Error::Render] when `width` leaves less than one pixel
    /// per module.
    pub fn new(barcode: &'a Barcode, width: u32, height: u32) -> Result<Self> {
        let modules = barcode.module_count();
        let bar_width = width as usize / modules.max(1);
        if bar_width < 1 {
            return Err(Error::Render { width, modules });
        }

        let offset = (width as usize - bar_width * modules) / 2;
        Ok(Self {
            barcode,
            width,
            height,
            bar_width: bar_width as u32,
            offset: offset as u32,
            inverted: false
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per module.
    pub const fn bar_width(&self) -> u32 {
        self.bar_width
    }

    /// Blank pixels left of the first module.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// `true` when bars are drawn as `off` pixels on an `on` background.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Swaps the bar and background pixel values used by [BarcodeRender::fill]
    /// and by drawing.
    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Horizontal pixel span of every bar module, from left to right.
    pub fn bars(&self) -> impl Iterator<Item = Range<u32>> + 'a {
        let barcode: &'a Barcode = self.barcode;
        let (bar_width, offset) = (self.bar_width, self.offset);
        barcode.modules()
            .enumerate()
            .filter(|&(_, white)| !white)
            .map(move |(i, _)| {
                let start = offset + i as u32 * bar_width;
                start..start + bar_width
            })
    }

    /// Fills a row-major `width × height` pixel buffer with `on` for bar
    /// pixels and `off` for everything else (swapped when inverted).
    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        let (on, off) = if self.inverted { (off, on) } else { (on, off) };

        let mut row = vec![off.clone(); self.width as usize];
        for bar in self.bars() {
            row[bar.start as usize..bar.end as usize].fill(on.clone());
        }

        for line in target.chunks_mut(self.width as usize).take(self.height as usize) {
            line.clone_from_slice(&row[..line.len()]);
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }
}

impl Barcode {
    /// Shortcut for [BarcodeRender::new].
    pub fn render(&self, width: u32, height: u32) -> Result<BarcodeRender<'_>> {
        BarcodeRender::new(self, width, height)
    }
}

#[cfg(feature = "embedded-graphics")]
mod graphics {
    use embedded_graphics::{
        Drawable,
        pixelcolor::BinaryColor,
        prelude::{DrawTarget, Point, Size},
        primitives::Rectangle,
    };

    use super::BarcodeRender;

    impl Drawable for BarcodeRender<'_> {
        type Color = BinaryColor;
        type Output = ();

        /// Draws one full-height rectangle per bar module. Space modules are
        /// left untouched.
        fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
        where
            D: DrawTarget<Color = Self::Color>,
        {
            let color = if self.inverted { BinaryColor::Off } else { BinaryColor::On };
            for bar in self.bars() {
                let area = Rectangle::new(
                    Point::new(bar.start as i32, 0),
                    Size::new(bar.end - bar.start, self.height)
                );
                target.fill_solid(&area, color)?;
            }
            Ok(())
        }
    }
}
