use std::{error::Error, fmt::Display};

/// An error annotated with what the caller was doing when it happened.
///
/// Unlike a boxed error, the source keeps its concrete type so handlers can
/// still inspect it (for example to read a database error code).
#[derive(Debug)]
pub struct Contextual<E> {
    context: String,
    source: E,
}

impl<E> Contextual<E> {
    pub fn new(context: impl ToString, source: E) -> Self {
        Self {
            context: context.to_string(),
            source,
        }
    }

    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    #[inline]
    pub fn inner(&self) -> &E {
        &self.source
    }

    pub fn into_inner(self) -> E {
        self.source
    }
}

impl<E: Error + 'static> Error for Contextual<E> {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<E: Display> Display for Contextual<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.context, self.source)
    }
}

pub trait Context<T, E> {
    fn context(self, context: impl ToString) -> Result<T, Contextual<E>>;
}

impl<T, E: Error + 'static> Context<T, E> for Result<T, E> {
    fn context(self, context: impl ToString) -> Result<T, Contextual<E>> {
        self.map_err(|e| Contextual::new(context, e))
    }
}
