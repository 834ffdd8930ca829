use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::pastes::core::errors::PasteError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPaste {
    pub id: String,
    pub text: String,
    pub created_at: i64,
}

#[derive(Default)]
pub struct PasteQuery;

#[Object]
impl PasteQuery {
    async fn paste(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlPaste>> {
        let state = context.data_unchecked::<AppState>();
        match state.get_paste.handle(&id).await {
            Ok(paste) => Ok(Some(GqlPaste {
                id: paste.id,
                text: paste.text,
                created_at: paste.created_at,
            })),
            Err(PasteError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Default)]
pub struct PasteMutation;

#[Object]
impl PasteMutation {
    async fn create_paste(&self, context: &Context<'_>, text: String) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        Ok(ID(state.create_paste.handle(text).await?))
    }
}
