//! Value parsers for geometry arguments.

use stickies_layout::{Point, Rect, Size};

/// Split `s` on `sep` into exactly `N` integers.
fn ints<const N: usize>(s: &str, sep: char, shape: &str) -> Result<[i32; N], String> {
    let parts: Vec<&str> = s.split(sep).map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {shape}, got '{s}'"));
    }
    let mut out = [0i32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("'{part}' in '{s}' is not an integer: {e}"))?;
    }
    Ok(out)
}

/// Parse `X,Y,W,H`.
pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, w, h] = ints::<4>(s, ',', "X,Y,W,H")?;
    let r = Rect::new(x, y, w, h);
    if !r.is_valid() {
        return Err(format!("rectangle '{s}' must have positive width and height"));
    }
    Ok(r)
}

/// Parse `WxH`.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let [w, h] = ints::<2>(s, 'x', "WxH")?;
    if w <= 0 || h <= 0 {
        return Err(format!("size '{s}' must be positive"));
    }
    Ok(Size::new(w, h))
}

/// Parse `X,Y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = ints::<2>(s, ',', "X,Y")?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_geometry() {
        assert_eq!(parse_rect("0, 40,1000,760"), Ok(Rect::new(0, 40, 1000, 760)));
        assert_eq!(parse_size("300x200"), Ok(Size::new(300, 200)));
        assert_eq!(parse_point("-5,7"), Ok(Point::new(-5, 7)));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(parse_rect("1,2,3").is_err());
        assert!(parse_rect("0,0,0,10").is_err());
        assert!(parse_size("300").is_err());
        assert!(parse_size("0x10").is_err());
        assert!(parse_point("a,b").is_err());
    }
}
