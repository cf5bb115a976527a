//! Colored output on the console.

pub use termcolor::WriteColor;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream};

lazy_static! {
    /// The YELLOW color to use with `cwrite!` and `cwriteln!`
    pub static ref YELLOW: ColorSpec = {
        let mut color = ColorSpec::new();
        color.set_fg(Some(Color::Yellow)).set_intense(true).set_bold(true);
        color
    };
    /// The bold style to use with `cwrite!` and `cwriteln!`
    pub static ref BOLD: ColorSpec = {
        let mut color = ColorSpec::new();
        color.set_bold(true);
        color
    };
}

/// A printer that can be used with `cwrite!` and `cwriteln!`.
pub struct Printer<W> {
    /// The actual stream.
    pub stream: W,
}

impl Printer<StandardStream> {
    /// A printer on stdout, colored only if stdout is a terminal that supports colors.
    pub fn stdout() -> Self {
        let supported = supports_color::on(supports_color::Stream::Stdout).is_some();
        Self {
            stream: StandardStream::stdout(color_choice(supported)),
        }
    }
}

impl<W: WriteColor> Printer<W> {
    /// Wrap a stream.
    pub fn new(stream: W) -> Self {
        Self { stream }
    }
}

/// Pipes and files never get escape codes, whatever `TERM` says.
fn color_choice(supported: bool) -> ColorChoice {
    if supported {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Write to `$self.stream`, in the color specified as second parameter. The arguments that follow
/// will be passed to `write!`. Evaluates to `std::io::Result<()>`.
///
/// ```
/// use batch_checker::cwrite;
/// use batch_checker::printer::{Printer, BOLD};
///
/// # fn main() -> std::io::Result<()> {
/// let mut printer = Printer::new(termcolor::Buffer::no_color());
/// cwrite!(printer, BOLD, "The output is {}", 42)?;
/// assert_eq!(printer.stream.as_slice(), b"The output is 42");
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! cwrite {
    ($self:expr, $color:expr, $($arg:tt)*) => {{
        $crate::printer::WriteColor::set_color(&mut $self.stream, &$color)
            .and_then(|_| std::io::Write::write_fmt(&mut $self.stream, format_args!($($arg)*)))
            .and_then(|_| $crate::printer::WriteColor::reset(&mut $self.stream))
    }};
}

/// Write to `$self.stream`, in the color specified as second parameter. The arguments that follow
/// will be passed to `writeln!`. Evaluates to `std::io::Result<()>`.
#[macro_export]
macro_rules! cwriteln {
    ($self:expr, $color:expr, $($arg:tt)*) => {{
        $crate::cwrite!($self, $color, $($arg)*)
            .and_then(|_| std::io::Write::write_all(&mut $self.stream, b"\n"))
    }};
}
