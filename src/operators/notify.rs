//! Informational alert operator.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, Stream, StreamExt};

use crate::dialog::{AlertButton, DialogPresenter, DialogRequest};

use super::params::NotifyParams;

/// Present an informational dialog per element.
///
/// See [`AlertStreamExt::notify`](super::AlertStreamExt::notify) for the
/// operator contract.
pub(super) fn notify<S>(
    upstream: S,
    presenter: Arc<dyn DialogPresenter>,
    params: NotifyParams<S::Item>,
) -> BoxStream<'static, S::Item>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut upstream = Box::pin(upstream);
        // Single pending-dialog slot; replacing or dropping it cancels the
        // previous presentation (switch-to-latest).
        let mut in_flight: Option<BoxFuture<'static, Option<S::Item>>> = None;
        let mut upstream_done = false;

        loop {
            tokio::select! {
                biased;

                element = async { in_flight.as_mut().unwrap().await }, if in_flight.is_some() => {
                    in_flight = None;
                    if let Some(element) = element {
                        yield element;
                    }
                }

                next = upstream.next(), if !upstream_done => {
                    match next {
                        Some(element) => {
                            if in_flight.take().is_some() {
                                tracing::debug!("superseding pending info dialog");
                            }

                            let message = params.render_message(&element);
                            let request = DialogRequest::new(
                                params.context.clone(),
                                params.title.clone(),
                                message,
                                vec![AlertButton::action(params.button_title.clone())],
                            );
                            tracing::debug!(
                                request_id = %request.id,
                                wait_for_user = params.wait_for_user,
                                "presenting info dialog"
                            );

                            let presenter = presenter.clone();
                            if params.wait_for_user {
                                in_flight = Some(Box::pin(async move {
                                    match presenter.show(request).await {
                                        Ok(_) => Some(element),
                                        Err(error) => {
                                            tracing::warn!(error = %error, "info dialog failed, dropping element");
                                            None
                                        }
                                    }
                                }));
                            } else {
                                let mut side_effect: BoxFuture<'static, Option<S::Item>> =
                                    Box::pin(async move {
                                        if let Err(error) = presenter.show(request).await {
                                            tracing::warn!(error = %error, "info dialog failed");
                                        }
                                        None
                                    });
                                // Start the presentation before emitting the
                                // element; its resolution produces no event.
                                if side_effect.as_mut().now_or_never().is_none() {
                                    in_flight = Some(side_effect);
                                }
                                yield element;
                            }
                        }
                        None => upstream_done = true,
                    }
                }

                else => break,
            }
        }
    })
}
