pub mod frame_presenter;
