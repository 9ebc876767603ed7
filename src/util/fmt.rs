use std::fmt::{self, Debug, Formatter};

/// Formats a (cloneable) iterator as a debug list without collecting it first.
pub(crate) struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
