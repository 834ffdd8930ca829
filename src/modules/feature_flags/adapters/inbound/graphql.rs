use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::feature_flags::core::errors::FlagError;
use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlFeatureFlag {
    pub feature: String,
    pub client: String,
    pub stage: String,
    pub enabled: bool,
}

impl From<FeatureFlag> for GqlFeatureFlag {
    fn from(flag: FeatureFlag) -> Self {
        Self {
            feature: flag.key.feature,
            client: flag.key.client,
            stage: flag.key.stage,
            enabled: flag.enabled,
        }
    }
}

#[derive(Default)]
pub struct FlagQuery;

#[Object]
impl FlagQuery {
    async fn feature_flag(
        &self,
        context: &Context<'_>,
        feature: String,
        client: String,
        stage: String,
    ) -> GqlResult<Option<GqlFeatureFlag>> {
        let state = context.data_unchecked::<AppState>();
        let key = FlagKey::new(Some(feature), Some(client), Some(stage))?;
        match state.get_flag.handle(&key).await {
            Ok(flag) => Ok(Some(flag.into())),
            Err(FlagError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Default)]
pub struct FlagMutation;

#[Object]
impl FlagMutation {
    async fn set_feature_flag(
        &self,
        context: &Context<'_>,
        feature: String,
        client: String,
        stage: String,
        enabled: bool,
    ) -> GqlResult<GqlFeatureFlag> {
        let state = context.data_unchecked::<AppState>();
        let key = FlagKey::new(Some(feature), Some(client), Some(stage))?;
        Ok(state.set_flag.handle(key, enabled).await?.into())
    }

    async fn toggle_feature_flag(
        &self,
        context: &Context<'_>,
        feature: String,
        client: String,
        stage: String,
    ) -> GqlResult<GqlFeatureFlag> {
        let state = context.data_unchecked::<AppState>();
        let key = FlagKey::new(Some(feature), Some(client), Some(stage))?;
        Ok(state.toggle_flag.handle(&key).await?.into())
    }
}
