//! Plain-text helpers used to lay out docstrings.
//!
//! Widths are counted in `char`s.

const TAB_SIZE: usize = 8;

/// Remove the leading whitespace shared by every non-blank line.
///
/// Only spaces and tabs count as margin, and they must match exactly
/// (a tab and four spaces share no margin). Lines holding nothing but
/// whitespace are emptied and ignored when computing the margin.
pub fn dedent(text: &str) -> String {
    let margin = common_margin(text);
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let (content, newline) = match line.strip_suffix('\n') {
            Some(content) => (content, "\n"),
            None => (line, ""),
        };
        if !is_blank(content) {
            out.push_str(&content[margin.len()..]);
        }
        out.push_str(newline);
    }

    out
}

/// Dedent `text`, then drop surrounding whitespace and blank lines.
pub fn normalize(text: &str) -> String {
    dedent(text).trim().to_string()
}

/// Greedily wrap a single line to at most `width` characters per segment.
///
/// Lines break between words. A word that does not fit on a line of its own
/// first fills what is left of the current segment and is then cut into
/// `width`-sized pieces, so no segment is longer than `width`. At width zero
/// every segment holds a single character. Leading whitespace of the line is
/// kept on the first segment; whitespace at segment boundaries is dropped.
/// Tabs are expanded and other whitespace characters become spaces.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let line = expand_whitespace(line);
    let mut pending = chunks(&line);
    pending.reverse();
    let mut segments = Vec::new();

    while !pending.is_empty() {
        if !segments.is_empty() && pending.last().is_some_and(|c| c.starts_with(' ')) {
            pending.pop();
        }

        let mut current = String::new();
        let mut current_len = 0;
        while let Some(chunk) = pending.last() {
            let len = chunk.chars().count();
            if current_len + len > width {
                break;
            }
            current.push_str(chunk);
            current_len += len;
            pending.pop();
        }

        if let Some(chunk) = pending.last_mut() {
            if chunk.chars().count() > width {
                let room = if width == 0 { 1 } else { width - current_len };
                let (head, rest) = split_at_char(*chunk, room);
                current.push_str(head);
                *chunk = rest;
            }
        }

        let segment = current.trim_end();
        if !segment.is_empty() {
            segments.push(segment.to_string());
        }
    }

    segments
}

fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    let at = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}

/// Split into alternating runs of spaces and non-spaces.
fn chunks(line: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in line.char_indices() {
        let space = c == ' ';
        match in_space {
            Some(prev) if prev != space => {
                chunks.push(&line[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < line.len() {
        chunks.push(&line[start..]);
    }

    chunks
}

fn expand_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;

    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_SIZE - column % TAB_SIZE;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else if c.is_whitespace() {
            out.push(' ');
            column += 1;
        } else {
            out.push(c);
            column += 1;
        }
    }

    out
}

fn common_margin(text: &str) -> &str {
    let mut margin: Option<&str> = None;

    for line in text.lines().filter(|line| !is_blank(line)) {
        let indent = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        margin = Some(match margin {
            None => indent,
            Some(m) => common_prefix(m, indent),
        });
    }

    margin.unwrap_or("")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map(|((i, c), _)| i + c.len_utf8())
        .unwrap_or(0);
    &a[..len]
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
