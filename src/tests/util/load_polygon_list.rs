use std::{error, fs, io, path::Path};
use std::io::BufRead;

/// Load a polygon list from a file: one `x y` pair per line, with polygons separated by blank lines.
/// The first polygon is the border and the rest are its holes.
pub fn load_polygon_list<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<[f64; 2]>>, Box<dyn error::Error>> {
    let mut output = Vec::new();
    let mut current = Vec::new();
    let f = fs::File::open(path)?;
    for line in io::BufReader::new(f).lines() {
        let line = line?;
        let mut chunks = line.split_ascii_whitespace();
        if let Some(x) = chunks.next() {
            let x = x.parse::<f64>()?;
            let y = chunks.next().ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Missing y coordinate"))?.parse::<f64>()?;
            current.push([x, y]);
        } else if !current.is_empty() {
            output.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        output.push(current);
    }

    Ok(output)
}
