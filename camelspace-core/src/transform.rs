use crate::error::TransformError;

/// Turn a camelCase file name into space separated words.
///
/// The first character is uppercased and a space is inserted before every
/// later ASCII uppercase letter that is not already preceded by a space.
/// Casing is ASCII only; other characters pass through untouched.
///
/// ```
/// use camelspace_core::camel_space;
///
/// assert_eq!(camel_space("helloWorld.txt"), "Hello World.txt");
/// assert_eq!(camel_space("Hello World.txt"), "Hello World.txt");
/// ```
pub fn camel_space(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        // Nothing to do for an empty name
        return String::new();
    };

    let mut spaced = String::with_capacity(name.len() * 2);
    spaced.push(first.to_ascii_uppercase());

    let mut prev = first;
    for c in chars {
        if c.is_ascii_uppercase() && prev != ' ' {
            spaced.push(' ');
        }
        spaced.push(c);
        prev = c;
    }

    spaced
}

/// Reject a transformed name that grew beyond twice the original length.
///
/// Index-based scanning inserts at most one space per character after the
/// first, so a well-formed result is always shorter than `2 * original.len()`.
pub fn check_growth(original: &str, transformed: &str) -> Result<(), TransformError> {
    if transformed.len() > original.len() * 2 {
        return Err(TransformError::Runaway {
            original: original.to_string(),
            transformed: transformed.to_string(),
        });
    }
    Ok(())
}

/// Transform a name and verify the growth bound in one step.
pub fn transform_name(name: &str) -> Result<String, TransformError> {
    let spaced = camel_space(name);
    check_growth(name, &spaced)?;
    Ok(spaced)
}
