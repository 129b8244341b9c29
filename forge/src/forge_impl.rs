//! Forge dispatcher: validates options, compiles prompts, calls the remote
//! generator or the offline sampler, and reconciles the answer

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use shared::{
    ApiFailure, Description, DescriptionOptions, Endpoint, ForgeResponse, GeneratedResult, GenerationMethod,
    GenerationOptions, Homebrew, HomebrewOptions, HomebrewResponse, Names, NamesOptions,
};

use crate::core::{
    compile_description_prompt, compile_homebrew_prompt, compile_names_prompt, compile_schema,
    reconcile_homebrew, Validate,
};
use crate::error::{ForgeError, ForgeResult};
use crate::services::OfflineNames;
use crate::traits::{AuthSource, Generator, RemoteCall};
use crate::types::{DescriptionRequest, HomebrewRequest, NamesRequest};

pub struct Forge<R, A>
where
    R: RemoteCall,
    A: AuthSource,
{
    remote: R,
    auth: A,
    offline: Arc<OfflineNames>,
}

impl<R, A> Forge<R, A>
where
    R: RemoteCall,
    A: AuthSource,
{
    /// Dispatcher using the process-wide bundled offline dataset
    pub fn new(remote: R, auth: A) -> Self {
        Self::with_offline(remote, auth, OfflineNames::global())
    }

    pub fn with_offline(remote: R, auth: A, offline: Arc<OfflineNames>) -> Self {
        Self { remote, auth, offline }
    }

    pub fn offline(&self) -> &Arc<OfflineNames> {
        &self.offline
    }

    pub async fn generate_names(&self, options: &NamesOptions) -> ForgeResult<Names> {
        let options = options.validate()?;

        match options.method {
            GenerationMethod::Simple => {
                let gender = Some(options.gender.as_str()).filter(|g| !g.is_empty());
                let names = self
                    .offline
                    .sample(&options.category, gender, options.quantity as usize)
                    .await?;
                Ok(Names { names })
            }
            GenerationMethod::Ai => {
                let prompt = compile_names_prompt(&options);
                self.request(Endpoint::Names, &NamesRequest { prompt }).await
            }
        }
    }

    pub async fn generate_description(&self, options: &DescriptionOptions) -> ForgeResult<Description> {
        let options = options.validate()?;
        let prompt = compile_description_prompt(&options);
        self.request(Endpoint::Description, &DescriptionRequest { prompt }).await
    }

    pub async fn generate_homebrew(&self, options: &HomebrewOptions) -> ForgeResult<Homebrew> {
        let options = options.validate()?;
        let prompt = compile_homebrew_prompt(&options);
        let schema = compile_schema(&options);
        debug!("Homebrew schema fields: {:?}", schema.field_keys());

        let request = HomebrewRequest {
            prompt,
            homebrew: schema.into_value(),
        };
        let response: HomebrewResponse = self.request(Endpoint::Homebrew, &request).await?;
        Ok(reconcile_homebrew(&options, response))
    }

    /// POST `body` and unwrap the response envelope
    async fn request<B, T>(&self, endpoint: Endpoint, body: &B) -> ForgeResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let token = self.auth.auth_token();

        info!("📡 Requesting {} generation", endpoint);
        let raw = self
            .remote
            .call(endpoint, body, &token)
            .await
            .map_err(|failure| ForgeError::from_api_failure(failure, endpoint))?;

        let envelope = ForgeResponse::<T>::from_value(raw).map_err(|e| ForgeError::Transport {
            reason: ApiFailure::InvalidResponse(e.to_string()),
        })?;

        envelope.into_result().map_err(ForgeError::from_remote_message)
    }
}

#[async_trait]
impl<R, A> Generator for Forge<R, A>
where
    R: RemoteCall,
    A: AuthSource,
{
    async fn generate(&self, options: GenerationOptions) -> ForgeResult<GeneratedResult> {
        match options {
            GenerationOptions::Names(options) => self.generate_names(&options).await.map(GeneratedResult::Names),
            GenerationOptions::Description(options) => {
                self.generate_description(&options).await.map(GeneratedResult::Description)
            }
            GenerationOptions::Homebrew(options) => {
                self.generate_homebrew(&options).await.map(GeneratedResult::Homebrew)
            }
        }
    }
}
