//! Character-class scanning primitives shared by the field parsers.
//!
//! Each function takes a string and a byte position and returns how far it
//! got. None of them fail: when nothing matches the run is empty and the
//! position comes back unchanged, which is distinct from having run out of
//! input (position equal to the length of the string).

/// Scan the longest run of characters satisfying `predicate` starting at
/// `i`, returning the run and the position just past it.
pub fn scan_while<P>(s: &str, i: usize, predicate: P) -> (&str, usize)
where
    P: Fn(char) -> bool,
{
    let rest = match s.get(i..) {
        Some(rest) => rest,
        None => return ("", i),
    };

    let width = rest
        .char_indices()
        .find(|&(_, c)| !predicate(c))
        .map(|(j, _)| j)
        .unwrap_or(rest.len());

    (&rest[..width], i + width)
}

pub fn scan_digits(s: &str, i: usize) -> (&str, usize) {
    scan_while(s, i, |c| c.is_ascii_digit())
}

pub fn scan_alpha(s: &str, i: usize) -> (&str, usize) {
    scan_while(s, i, char::is_alphabetic)
}

pub fn skip_non_digits(s: &str, i: usize) -> usize {
    scan_while(s, i, |c| !c.is_ascii_digit()).1
}

pub fn skip_non_alpha(s: &str, i: usize) -> usize {
    scan_while(s, i, |c| !c.is_alphabetic()).1
}

pub fn skip_whitespace(s: &str, i: usize) -> usize {
    scan_while(s, i, char::is_whitespace).1
}

/// A position within a field, advanced by the scanning primitives above.
#[derive(Debug, Clone)]
pub struct Cursor<'i> {
    source: &'i str,
    offset: usize,
}

impl<'i> Cursor<'i> {
    pub fn new(source: &'i str) -> Cursor<'i> {
        Cursor { source, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_finished(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Everything not yet consumed.
    pub fn remainder(&self) -> &'i str {
        self.source
            .get(self.offset..)
            .unwrap_or("")
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder()
            .chars()
            .next()
    }

    /// Consume a single character.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    pub fn take_while<P>(&mut self, predicate: P) -> &'i str
    where
        P: Fn(char) -> bool,
    {
        let (run, offset) = scan_while(self.source, self.offset, predicate);
        self.offset = offset;
        run
    }

    pub fn take_digits(&mut self) -> &'i str {
        let (run, offset) = scan_digits(self.source, self.offset);
        self.offset = offset;
        run
    }

    pub fn take_alpha(&mut self) -> &'i str {
        let (run, offset) = scan_alpha(self.source, self.offset);
        self.offset = offset;
        run
    }

    pub fn skip_non_digits(&mut self) {
        self.offset = skip_non_digits(self.source, self.offset);
    }

    pub fn skip_non_alpha(&mut self) {
        self.offset = skip_non_alpha(self.source, self.offset);
    }

    pub fn skip_whitespace(&mut self) {
        self.offset = skip_whitespace(self.source, self.offset);
    }
}
