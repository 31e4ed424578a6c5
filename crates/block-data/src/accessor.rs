//! Resolves the product a block renders, before the block itself runs.

use block_core::HostUtils;
use block_observability::StructuredLogger;

use crate::client::{FetchError, ProductClient};
use crate::model::{Product, SearchQuery};

/// Collaborators the data accessor needs from the host.
pub struct DataContext<'a> {
    pub utils: &'a dyn HostUtils,
    pub client: &'a dyn ProductClient,
    pub logger: &'a StructuredLogger,
}

/// Data handed to the block as props.
#[derive(Debug, Clone, PartialEq)]
pub struct DataProps {
    pub product: Product,
}

/// Fetch the product for a block.
///
/// On a rendered page with a configured product id this fetches that product.
/// Otherwise (editor preview, or no product picked yet) it runs an empty
/// search and shows the first result. Failures are returned to the host
/// untouched.
pub async fn get_data_props(
    ctx: &DataContext<'_>,
    product_id: Option<&str>,
) -> Result<DataProps, FetchError> {
    let product_id = product_id.filter(|id| !id.is_empty());

    let result = match product_id {
        Some(id) if ctx.utils.is_rendering() => {
            ctx.logger
                .debug_builder("Fetching configured product")
                .field("product_id", id)
                .emit();
            ctx.client.get_by_id(id).await
        }
        _ => {
            ctx.logger
                .debug_builder("Fetching first product from search")
                .field_bool("has_product_id", product_id.is_some())
                .emit();
            ctx.client
                .search(&SearchQuery::default())
                .await
                .and_then(|response| {
                    response
                        .items
                        .into_iter()
                        .next()
                        .ok_or(FetchError::EmptySearch)
                })
        }
    };

    match result {
        Ok(product) => Ok(DataProps { product }),
        Err(e) => {
            ctx.logger
                .warn_builder("Product fetch failed")
                .field("error", e.to_string())
                .emit();
            Err(e)
        }
    }
}
