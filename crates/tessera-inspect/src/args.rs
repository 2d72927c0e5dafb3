use std::fmt;
use std::path::PathBuf;

pub const USAGE: &str = "usage:
  tessera-inspect rect <x> <y> <width> <height> [z]
  tessera-inspect json <path>";

/// What the inspector was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Build a rectangle-form quad. A depth selects the vertex variant.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        z: Option<f32>,
    },
    /// Load a point quad from a JSON file.
    Json { path: PathBuf },
}

/// A command line that could not be understood.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgsError {
    pub message: String,
}

impl ArgsError {
    fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{USAGE}", self.message)
    }
}

impl std::error::Error for ArgsError {}

/// Parses the arguments that follow the program name.
pub fn parse<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
    let Some((sub, rest)) = args.split_first() else {
        return Err(ArgsError::new("missing command"));
    };

    match sub.as_str() {
        "rect" => {
            if !(4..=5).contains(&rest.len()) {
                return Err(ArgsError::new(format!(
                    "rect takes 4 or 5 numbers, got {}",
                    rest.len()
                )));
            }
            Ok(Command::Rect {
                x: number("x", &rest[0])?,
                y: number("y", &rest[1])?,
                width: number("width", &rest[2])?,
                height: number("height", &rest[3])?,
                z: rest.get(4).map(|z| number("z", z)).transpose()?,
            })
        }
        "json" => match rest {
            [path] => Ok(Command::Json { path: PathBuf::from(path) }),
            _ => Err(ArgsError::new("json takes exactly one path")),
        },
        other => Err(ArgsError::new(format!("unknown command `{other}`"))),
    }
}

fn number(name: &str, raw: &str) -> Result<f32, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::new(format!("{name}: `{raw}` is not a number")))
}
