use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityVersion<T> {
    /*
     * Nothing means that the entity has never been persisted
     */
    Nothing,
    /*
     * Exact means that the entity is persisted and this is the version currently stored
     */
    Exact(i64, PhantomData<T>),
}

impl<T> EntityVersion<T> {
    pub fn new(version: i64) -> Self {
        if version < 0 {
            Self::Nothing
        } else {
            Self::Exact(version, PhantomData)
        }
    }

    /// Version the store writes on the next successful save.
    pub fn next(&self) -> Self {
        match self {
            Self::Nothing => Self::Exact(0, PhantomData),
            Self::Exact(version, _) => Self::Exact(version + 1, PhantomData),
        }
    }
}

impl<T> From<i64> for EntityVersion<T> {
    fn from(version: i64) -> Self {
        Self::new(version)
    }
}

impl<T> AsRef<i64> for EntityVersion<T> {
    fn as_ref(&self) -> &i64 {
        match self {
            Self::Nothing => &-1,
            Self::Exact(version, _) => version,
        }
    }
}

#[cfg(test)]
mod test {
    use super::EntityVersion;

    #[test]
    fn negative_version_means_nothing() {
        assert_eq!(EntityVersion::<()>::new(-1), EntityVersion::Nothing);
        assert_eq!(*EntityVersion::<()>::Nothing.as_ref(), -1);
    }

    #[test]
    fn next_starts_at_zero_and_increments() {
        let first = EntityVersion::<()>::Nothing.next();
        assert_eq!(first, EntityVersion::new(0));
        assert_eq!(*first.next().as_ref(), 1);
    }
}
