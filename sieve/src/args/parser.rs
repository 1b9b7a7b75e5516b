//! Turns scanned argument segments into predicate settings.

use log::{debug, trace};

use super::scanner::split_arg;
use crate::{Error, Predicate, Result};

/// Parse filter arguments into a fresh [`Predicate`].
///
/// ```text
/// type=element            {"type":"element"}
/// attr.class              {"attr":{"class":null}}
/// re2.attr.href=^https:   {"re2":{"attr":{"href":"^https:"}}}
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Predicate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut predicate = Predicate::default();
    predicate.apply_args(args)?;
    Ok(predicate)
}

impl Predicate {
    /// Apply filter arguments on top of this predicate.
    ///
    /// Later settings replace earlier ones. If any argument is invalid the
    /// predicate is left untouched.
    pub fn apply_args<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scratch = self.clone();
        let mut count = 0;
        for arg in args {
            apply_arg(&mut scratch, arg.as_ref())?;
            count += 1;
        }
        debug!("applied {} filter argument(s)", count);
        *self = scratch;
        Ok(())
    }
}

fn apply_arg(predicate: &mut Predicate, arg: &str) -> Result<()> {
    let segments = split_arg(arg);
    trace!("filter argument {:?} -> {:?}", arg, segments);

    let parts: Vec<&str> = segments.iter().map(String::as_str).collect();
    match parts.as_slice() {
        [] => {}
        ["type", kind] => predicate.kind = Some(kind.parse()?),
        ["data", text] => predicate.text = Some(text.to_string()),
        ["attr", key] => {
            predicate.attributes.insert(key.to_string(), None);
        }
        ["attr", key, value] => {
            predicate
                .attributes
                .insert(key.to_string(), Some(value.to_string()));
        }
        ["re2", "data", pattern] => predicate.regex.text_pattern = Some(pattern.to_string()),
        ["re2", "attr", key] => {
            predicate.regex.attribute_patterns.insert(key.to_string(), None);
        }
        ["re2", "attr", key, pattern] => {
            predicate
                .regex
                .attribute_patterns
                .insert(key.to_string(), Some(pattern.to_string()));
        }
        _ => return Err(Error::Syntax(arg.to_string())),
    }
    Ok(())
}
