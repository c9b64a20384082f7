use memchr::memchr;
use smallvec::SmallVec;

use crate::matcher::{Bindings, SPLAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSegment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// A `from` path split into segments, ready to be matched against request
/// paths.
///
/// One trailing `/` is ignored. A trailing `*` (with or without a preceding
/// `/`) captures the remainder of the request path as `splat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate<'a> {
    segments: SmallVec<[TemplateSegment<'a>; 8]>,
    splat: bool,
}

impl<'a> PathTemplate<'a> {
    pub fn new(from: &'a str) -> Self {
        let trimmed = from.strip_suffix('/').unwrap_or(from);
        let (body, splat) = match trimmed.strip_suffix('*') {
            Some(body) => (body.strip_suffix('/').unwrap_or(body), true),
            None => (trimmed, false),
        };

        let body = body.strip_prefix('/').unwrap_or(body);
        let segments = if body.is_empty() {
            SmallVec::new()
        } else {
            body.split('/')
                .map(|seg| match seg.strip_prefix(':') {
                    Some(name) => TemplateSegment::Placeholder(name),
                    None => TemplateSegment::Literal(seg),
                })
                .collect()
        };

        Self { segments, splat }
    }

    pub fn segments(&self) -> &[TemplateSegment<'a>] {
        &self.segments
    }

    pub fn has_splat(&self) -> bool {
        self.splat
    }

    /// Matches `path` segment by segment and returns the captured bindings.
    ///
    /// Literal segments compare byte-for-byte; placeholders capture one
    /// non-empty segment. Without a splat, the request may only carry one
    /// extra trailing `/`.
    #[tracing::instrument(level = "trace", skip(self), fields(segments = self.segments.len() as u64, splat = self.splat))]
    pub fn match_path<'p>(&self, path: &'p str) -> Option<Bindings<'p>>
    where
        'a: 'p,
    {
        let mut bindings = Bindings::new();
        let mut rest = path.strip_prefix('/').unwrap_or(path);

        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                rest = rest.strip_prefix('/')?;
            }

            let end = memchr(b'/', rest.as_bytes()).unwrap_or(rest.len());
            let (head, tail) = rest.split_at(end);

            match *segment {
                TemplateSegment::Literal(literal) => {
                    if head != literal {
                        return None;
                    }
                }
                TemplateSegment::Placeholder(name) => {
                    if head.is_empty() {
                        return None;
                    }
                    bindings.bind(name, head);
                }
            }

            rest = tail;
        }

        if self.splat {
            let trailing = if self.segments.is_empty() {
                rest
            } else {
                rest.strip_prefix('/').unwrap_or(rest)
            };
            bindings.bind(SPLAT, trailing);
        } else if !(rest.is_empty() || rest == "/") {
            return None;
        }

        Some(bindings)
    }
}
