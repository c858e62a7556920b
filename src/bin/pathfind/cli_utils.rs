use geopath::errors::{GeopathError, GeopathResult};
use geopath::geometry::{Point, Rectangle};

/// Generic parser for delimited strings that return fixed-size arrays
pub fn parse_delimited<T, const N: usize>(
    input: &str,
    delimiter: char,
    type_name: &str,
    parser: impl Fn(&str) -> Result<T, std::num::ParseFloatError>,
) -> GeopathResult<[T; N]>
where
    T: Copy + Default,
{
    let parts: Vec<&str> = input.split(delimiter).collect();
    if parts.len() != N {
        return Err(GeopathError::InvalidArgument {
            reason: format!(
                "Invalid {type_name} format '{input}'. Expected {N} {delimiter}-separated values"
            ),
        });
    }

    let mut result = [T::default(); N];
    for (i, part) in parts.iter().enumerate() {
        result[i] = parser(part.trim()).map_err(|_| GeopathError::InvalidArgument {
            reason: format!("Invalid {type_name} value: '{part}'"),
        })?;
    }

    Ok(result)
}

/// Parse point string "X,Y"
pub fn parse_point(point_str: &str) -> GeopathResult<Point> {
    let [x, y] = parse_delimited::<f64, 2>(point_str, ',', "point", |s| s.parse())?;
    Ok(Point::new(x, y))
}

/// Parse rectangle string "X,Y,WIDTH,HEIGHT" with validation
pub fn parse_rectangle(rect_str: &str) -> GeopathResult<Rectangle> {
    let [x, y, width, height] =
        parse_delimited::<f64, 4>(rect_str, ',', "rectangle", |s| s.parse())?;

    if width < 0.0 || height < 0.0 {
        return Err(GeopathError::InvalidArgument {
            reason: format!("Rectangle '{rect_str}' must have non-negative width and height"),
        });
    }

    Ok(Rectangle::new(x, y, width, height))
}
