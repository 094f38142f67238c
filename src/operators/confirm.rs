//! Confirmation alert operators.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};

use crate::dialog::{ConfirmationResponse, DialogPresenter, DialogRequest};

use super::params::ConfirmParams;

/// Present a two-button confirmation dialog per element.
///
/// See [`AlertStreamExt::confirm`](super::AlertStreamExt::confirm) for the
/// operator contract.
pub(super) fn confirm<S>(
    upstream: S,
    presenter: Arc<dyn DialogPresenter>,
    params: ConfirmParams<S::Item>,
) -> BoxStream<'static, ConfirmationResponse<S::Item>>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut upstream = Box::pin(upstream);
        // Single pending-dialog slot; replacing or dropping it cancels the
        // previous presentation (switch-to-latest).
        let mut in_flight: Option<BoxFuture<'static, Option<ConfirmationResponse<S::Item>>>> = None;
        let mut upstream_done = false;

        loop {
            tokio::select! {
                biased;

                response = async { in_flight.as_mut().unwrap().await }, if in_flight.is_some() => {
                    in_flight = None;
                    if let Some(response) = response {
                        yield response;
                    }
                }

                next = upstream.next(), if !upstream_done => {
                    match next {
                        Some(element) => {
                            if in_flight.take().is_some() {
                                tracing::debug!("superseding pending confirmation dialog");
                            }

                            let message = params.render_message(&element);
                            let request = DialogRequest::new(
                                params.context.clone(),
                                params.title.clone(),
                                message,
                                params.buttons(),
                            );
                            tracing::debug!(request_id = %request.id, "presenting confirmation dialog");

                            let presenter = presenter.clone();
                            in_flight = Some(Box::pin(async move {
                                match presenter.show(request).await {
                                    // Index 0 is the confirm button
                                    Ok(index) => Some(ConfirmationResponse {
                                        confirmed: index == 0,
                                        value: element,
                                    }),
                                    Err(error) => {
                                        tracing::warn!(error = %error, "confirmation dialog failed, dropping element");
                                        None
                                    }
                                }
                            }));
                        }
                        None => upstream_done = true,
                    }
                }

                else => break,
            }
        }
    })
}

/// `confirm`, keeping only confirmed elements.
pub(super) fn filter_confirmed<S>(
    upstream: S,
    presenter: Arc<dyn DialogPresenter>,
    params: ConfirmParams<S::Item>,
) -> BoxStream<'static, S::Item>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    confirm(upstream, presenter, params)
        .filter_map(|response| async move { response.confirmed.then_some(response.value) })
        .boxed()
}
