use super::{
    ADDITIVE_LABEL, CLOSE_LABEL, FOLDER_ICON, LOAD_LABEL, REMOVE_LABEL, ROOT_LABEL, SCENE_ICON,
    SINGLE_LABEL,
};
use crate::config::Config;
use crate::scenes::{OpenMode, SceneAsset, SceneError, Workspace};
use radial::{MenuItem, MenuTree, NodeId};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

fn report(result: Result<(), SceneError>) {
    if let Err(e) = result {
        log::error!("Scene operation failed: {}", e);
    }
}

fn list_node(
    tree: &mut MenuTree,
    label: &str,
    config: &Config,
    scenes: &[SceneAsset],
) -> Option<NodeId> {
    let mut item = MenuItem::new(label).icon(FOLDER_ICON);
    if !scenes.is_empty() {
        item = item.radius(config.list_radius);
    }
    tree.add_child(tree.root(), item)
}

fn open_item(
    label: &str,
    workspace: &Rc<RefCell<Workspace>>,
    path: PathBuf,
    mode: OpenMode,
) -> MenuItem {
    let workspace = workspace.clone();
    MenuItem::new(label)
        .icon(SCENE_ICON)
        .action(move || workspace.borrow_mut().open(&path, mode))
}

fn close_item(scene: &SceneAsset, workspace: &Rc<RefCell<Workspace>>, remove: bool) -> MenuItem {
    let workspace = workspace.clone();
    let path = scene.path.clone();
    MenuItem::new(scene.name.as_str())
        .icon(SCENE_ICON)
        .action(move || report(workspace.borrow_mut().close(&path, remove)))
}

fn fill_menu(
    tree: &mut MenuTree,
    scenes: &[SceneAsset],
    workspace: &Rc<RefCell<Workspace>>,
    config: &Config,
) -> Option<()> {
    let load = list_node(tree, LOAD_LABEL, config, scenes)?;
    for scene in scenes {
        let node = tree.add_child(load, MenuItem::new(scene.name.as_str()).icon(SCENE_ICON))?;
        let modes = [
            (SINGLE_LABEL, OpenMode::Single),
            (ADDITIVE_LABEL, OpenMode::Additive),
        ];
        for (label, mode) in modes {
            tree.add_child(node, open_item(label, workspace, scene.path.clone(), mode))?;
        }
    }

    let close = list_node(tree, CLOSE_LABEL, config, scenes)?;
    for scene in scenes {
        tree.add_child(close, close_item(scene, workspace, false))?;
    }

    let remove = list_node(tree, REMOVE_LABEL, config, scenes)?;
    for scene in scenes {
        tree.add_child(remove, close_item(scene, workspace, true))?;
    }

    Some(())
}

/// Load, Close and Remove branches over every known scene. Actions act on `workspace`.
pub fn build_menu(
    scenes: &[SceneAsset],
    workspace: &Rc<RefCell<Workspace>>,
    config: &Config,
) -> MenuTree {
    let mut tree = MenuTree::new(ROOT_LABEL);
    if fill_menu(&mut tree, scenes, workspace, config).is_none() {
        log::error!("Scene menu was built incomplete");
    }
    tree
}
