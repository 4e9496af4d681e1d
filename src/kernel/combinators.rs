use super::{parser, Cursor, Failure, PResult, Parser, Success};

/// Runs `a`, then `b` on `a`'s residual cursor; the result is the pair.
pub fn seq<A, B>(a: Parser<A>, b: Parser<B>) -> Parser<(A, B)>
where
    A: Send + Sync + 'static,
    B: Send + Sync + 'static,
{
    parser(move |cursor: Cursor<'_>| -> PResult<'_, (A, B)> {
        let ra = a(cursor)?;
        match b(ra.cursor) {
            Ok(rb) => {
                let mut traces = ra.traces;
                traces.extend(rb.traces);
                Ok(Success::with_traces(rb.cursor, (ra.value, rb.value), traces))
            }
            Err(fb) => {
                let mut traces = ra.traces;
                traces.extend(fb.traces);
                Err(Failure::with_traces(fb.cursor, traces))
            }
        }
    })
}

/// Like [`seq`] but keeps only the left value.
pub fn left<A, B>(a: Parser<A>, b: Parser<B>) -> Parser<A>
where
    A: Clone + Send + Sync + 'static,
    B: Send + Sync + 'static,
{
    map(seq(a, b), |(av, _)| av)
}

/// Like [`seq`] but keeps only the right value.
pub fn right<A, B>(a: Parser<A>, b: Parser<B>) -> Parser<B>
where
    A: Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
{
    map(seq(a, b), |(_, bv)| bv)
}

/// Tries `a`; if it fails, tries `b` at the *original* cursor unconditionally
/// — regardless of how much `a` consumed before failing. No PEG-style cut.
pub fn alt<T>(a: Parser<T>, b: Parser<T>) -> Parser<T>
where
    T: Send + Sync + 'static,
{
    parser(move |cursor: Cursor<'_>| -> PResult<'_, T> {
        match a(cursor) {
            Ok(ra) => Ok(ra),
            Err(fa) => match b(cursor) {
                Ok(mut rb) => {
                    let mut traces = fa.traces;
                    traces.extend(std::mem::take(&mut rb.traces));
                    Ok(Success::with_traces(rb.cursor, rb.value, traces))
                }
                Err(fb) => {
                    let mut traces = fa.traces;
                    traces.extend(fb.traces);
                    Err(Failure::with_traces(fb.cursor, traces))
                }
            },
        }
    })
}

/// Zero-or-more; always succeeds; result is an ordered sequence.
pub fn many<T>(a: Parser<T>) -> Parser<Vec<T>>
where
    T: Send + Sync + 'static,
{
    parser(move |mut cursor: Cursor<'_>| -> PResult<'_, Vec<T>> {
        let mut values = Vec::new();
        let mut traces = Vec::new();
        loop {
            match a(cursor) {
                Ok(r) => {
                    traces.extend(r.traces);
                    cursor = r.cursor;
                    values.push(r.value);
                }
                Err(f) => {
                    traces.extend(f.traces);
                    break;
                }
            }
        }
        Ok(Success::with_traces(cursor, values, traces))
    })
}

/// One-or-more; fails (without consuming) if `a` never matches.
pub fn many1<T>(a: Parser<T>) -> Parser<Vec<T>>
where
    T: Send + Sync + 'static,
{
    let all = many(a);
    parser(move |cursor: Cursor<'_>| -> PResult<'_, Vec<T>> {
        let r = all(cursor)?;
        if r.value.is_empty() {
            Err(Failure::with_traces(cursor, r.traces))
        } else {
            Ok(r)
        }
    })
}

/// Wraps `a`; on failure, succeeds at the original cursor with `None`. Never
/// fails on any input, for any `a`.
pub fn opt<T>(a: Parser<T>) -> Parser<Option<T>>
where
    T: Send + Sync + 'static,
{
    parser(move |cursor: Cursor<'_>| -> PResult<'_, Option<T>> {
        match a(cursor) {
            Ok(r) => Ok(Success::with_traces(r.cursor, Some(r.value), r.traces)),
            Err(f) => Ok(Success::with_traces(cursor, None, f.traces)),
        }
    })
}

/// Applies a pure function to a successful result's value.
pub fn map<A, B, F>(a: Parser<A>, f: F) -> Parser<B>
where
    A: Send + Sync + 'static,
    B: Send + Sync + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    parser(move |cursor: Cursor<'_>| -> PResult<'_, B> {
        let r = a(cursor)?;
        Ok(Success::with_traces(r.cursor, f(r.value), r.traces))
    })
}

/// Discards `a`'s value and substitutes `v` on success.
pub fn replace<A, B>(a: Parser<A>, v: B) -> Parser<B>
where
    A: Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
{
    map(a, move |_| v.clone())
}

/// A parser that always succeeds without consuming input, yielding `v`.
pub fn succeed<T>(v: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    parser(move |cursor: Cursor<'_>| -> PResult<'_, T> { Ok(Success::new(cursor, v.clone())) })
}
