use std::future::Future;

use crate::domain::user::models::UserId;

/// A resource with exactly one owning user.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// True iff the resource belongs to the caller.
pub fn authorize<R: Owned>(caller: UserId, resource: &R) -> bool {
    resource.owner_id() == caller
}

/// Load a resource and enforce ownership in one step.
///
/// Awaits the repository load and filters the result: a resource that does
/// not exist and a resource owned by someone else both come back as `None`.
/// Callers map that single outcome to their not-found rejection, so the
/// existence of another user's resource is never distinguishable from its
/// absence.
pub async fn enforce<R, E, F>(caller: UserId, loader: F) -> Result<Option<R>, E>
where
    R: Owned,
    F: Future<Output = Result<Option<R>, E>>,
{
    let resource = loader.await?;
    Ok(resource.filter(|r| authorize(caller, r)))
}
