use crate::modules::cafes::use_cases::create_cafe::handler::CreateCafeHandler;
use crate::modules::cafes::use_cases::delete_cafe::handler::DeleteCafeHandler;
use crate::modules::cafes::use_cases::get_cafe::handler::GetCafeHandler;
use crate::modules::cafes::use_cases::list_cafes::handler::ListCafesHandler;
use crate::modules::cafes::use_cases::update_cafe::handler::UpdateCafeHandler;
use crate::shared::infrastructure::cafe_store::CafeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_cafes: Arc<ListCafesHandler>,
    pub get_cafe: Arc<GetCafeHandler>,
    pub create_cafe: Arc<CreateCafeHandler>,
    pub update_cafe: Arc<UpdateCafeHandler>,
    pub delete_cafe: Arc<DeleteCafeHandler>,
}

impl AppState {
    /// Wires every use case handler to the same store.
    pub fn new(store: Arc<dyn CafeStore>) -> Self {
        Self {
            list_cafes: Arc::new(ListCafesHandler::new(store.clone())),
            get_cafe: Arc::new(GetCafeHandler::new(store.clone())),
            create_cafe: Arc::new(CreateCafeHandler::new(store.clone())),
            update_cafe: Arc::new(UpdateCafeHandler::new(store.clone())),
            delete_cafe: Arc::new(DeleteCafeHandler::new(store)),
        }
    }
}
