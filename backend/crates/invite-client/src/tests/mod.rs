mod access_gate;
mod landing_url;
