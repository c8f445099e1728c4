mod loading;

pub(crate) use loading::render_loading;
