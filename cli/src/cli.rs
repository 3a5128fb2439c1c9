use std::path::Path;

use rainquest::Hdf5Store;

pub(crate) fn store<P>(path: P) -> anyhow::Result<Hdf5Store>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let store = Hdf5Store::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open {}: {}", path.display(), e))?;
    Ok(store)
}
