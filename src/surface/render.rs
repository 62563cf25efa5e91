use std::io::Write;

use errors::{Result, ResultExt};
use math::ScalarField;
use super::{Extrema, Surface};

impl<F: ScalarField> Surface<F> {
    /// Scan for extrema, then write the whole plot as an SVG document.
    /// Returns the number of polygons written.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> Result<usize> {
        let extrema = self.extrema();
        info!("Height range [{}, {}]", extrema.min_z, extrema.max_z);
        self.write_svg_with(&extrema, writer)
    }

    pub fn write_svg_with<W: Write>(&self, extrema: &Extrema, writer: &mut W) -> Result<usize> {
        write!(writer,
               "<svg xmlns='http://www.w3.org/2000/svg' style='stroke: grey; stroke-width: \
                0.7' width='{}' height='{}'>",
               self.spec.width,
               self.spec.height)
            .chain_err(|| "Could not write svg header.")?;

        let mut num_polygons = 0;
        for (i, j) in self.cells() {
            let a = self.corner(i + 1, j);
            let b = self.corner(i, j);
            let c = self.corner(i, j + 1);
            let d = self.corner(i + 1, j + 1);

            // Only corner a's blend ends up in the fill.
            let target = extrema.target_color(self.base_height(i, j));
            let [fill, _, _, _] = [a.color.blend(target),
                                   b.color.blend(target),
                                   c.color.blend(target),
                                   d.color.blend(target)];

            writeln!(writer,
                     "<polygon points='{},{} {},{} {},{} {},{}' style='fill:{}'/>",
                     a.screen.x,
                     a.screen.y,
                     b.screen.x,
                     b.screen.y,
                     c.screen.x,
                     c.screen.y,
                     d.screen.x,
                     d.screen.y,
                     fill.hex())
                .chain_err(|| format!("Could not write polygon for cell ({}, {}).", i, j))?;
            num_polygons += 1;
        }

        writeln!(writer, "</svg>").chain_err(|| "Could not write svg footer.")?;
        writer.flush().chain_err(|| "Could not flush svg output.")?;
        Ok(num_polygons)
    }
}
