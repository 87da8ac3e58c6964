//! Embedded Leaflet page.
//!
//! The page is a plain `&'static str`. [`MAP_DOCUMENT_PLACEHOLDER`] is replaced
//! with the JSON map document, and the script below turns it into Leaflet layers
//! and controls. Everything taken from the document goes through `textContent`
//! or Leaflet options, never through `innerHTML`.

pub const MAP_DOCUMENT_PLACEHOLDER: &str = "__GTLPARSER_MAP_DOCUMENT__";

pub const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>gtlparser map</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <script src="https://unpkg.com/leaflet-side-by-side@2.2.0/leaflet-side-by-side.min.js"></script>
  <style>
    body { margin: 0; font-family: sans-serif; }
    #map { width: 100%; }
    .gtl-legend { background: white; padding: 6px 10px; border-radius: 4px; box-shadow: 0 1px 5px rgba(0, 0, 0, 0.4); }
    .gtl-legend h4 { margin: 0 0 6px; }
    .gtl-legend-row { display: flex; align-items: center; gap: 6px; margin: 2px 0; }
    .gtl-selector { background: white; padding: 4px; }
    .gtl-selector button { margin-left: 4px; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script type="application/json" id="map-document">__GTLPARSER_MAP_DOCUMENT__</script>
  <script>
    (function () {
      const doc = JSON.parse(document.getElementById("map-document").textContent);
      const element = document.getElementById("map");
      element.style.height = doc.options.height;

      const map = L.map(element, {
        center: doc.options.center,
        zoom: doc.options.zoom,
        scrollWheelZoom: doc.options.scroll_wheel_zoom,
      });
      const built = [];
      const catalog = {};
      for (const basemap of doc.basemaps || []) {
        catalog[basemap.name] = basemap;
      }

      function tileLayer(l) {
        return L.tileLayer(l.url, {
          attribution: l.attribution || "",
          maxZoom: l.max_zoom || 22,
          opacity: l.opacity,
        });
      }

      function geoJsonLayer(l) {
        const layer = L.geoJSON(l.data, {
          style: () => l.style,
          pointToLayer: (feature, latlng) => L.circleMarker(latlng, l.style),
          onEachFeature: (feature, featureLayer) => {
            featureLayer.on("mouseover", () => featureLayer.setStyle(l.hover_style));
            featureLayer.on("mouseout", () => layer.resetStyle(featureLayer));
          },
        });
        return layer;
      }

      const builders = {
        tile: tileLayer,
        geo_json: geoJsonLayer,
        image: (l) => L.imageOverlay(l.url, l.bounds, { opacity: l.opacity }),
        video: (l) => L.videoOverlay(l.url, l.bounds, {
          opacity: l.opacity,
          autoplay: true,
          loop: true,
          muted: true,
        }),
        wms: (l) => L.tileLayer.wms(l.url, {
          layers: l.layers,
          format: l.format,
          transparent: l.transparent,
          attribution: l.attribution || "",
        }),
      };

      function legendControl(c) {
        const control = L.control({ position: c.position });
        control.onAdd = () => {
          const div = L.DomUtil.create("div", "gtl-legend");
          L.DomUtil.create("h4", "", div).textContent = c.title;
          const swatch = doc.swatches[c.shape];
          for (const entry of c.entries) {
            const row = L.DomUtil.create("div", "gtl-legend-row", div);
            const box = L.DomUtil.create("span", "", row);
            box.style.display = "inline-block";
            box.style.width = swatch.width_px + "px";
            box.style.height = swatch.height_px + "px";
            box.style.borderRadius = swatch.border_radius;
            box.style.background = entry.color;
            L.DomUtil.create("span", "", row).textContent = entry.label;
          }
          return div;
        };
        return control;
      }

      function selectorControl(c) {
        const control = L.control({ position: c.position });
        control.onAdd = () => {
          const div = L.DomUtil.create("div", "leaflet-bar gtl-selector");
          const select = L.DomUtil.create("select", "", div);
          for (const name of c.options) {
            const option = L.DomUtil.create("option", "", select);
            option.value = name;
            option.textContent = name;
            option.selected = name === c.selected;
          }
          const toggle = L.DomUtil.create("button", "", div);
          toggle.type = "button";
          toggle.textContent = "Basemaps";
          const close = L.DomUtil.create("button", "", div);
          close.type = "button";
          close.textContent = "×";
          select.style.display = c.state === "expanded" ? "" : "none";

          const owned = doc.layers.findIndex((l) => l.from_selector);
          let current = owned >= 0 ? built[owned] : null;
          L.DomEvent.on(toggle, "click", () => {
            select.style.display = select.style.display === "none" ? "" : "none";
          });
          L.DomEvent.on(close, "click", () => control.remove());
          L.DomEvent.on(select, "change", () => {
            const basemap = catalog[select.value];
            if (!basemap) {
              return;
            }
            if (current) {
              map.removeLayer(current);
            }
            current = tileLayer(basemap).addTo(map);
            current.bringToBack();
          });
          L.DomEvent.disableClickPropagation(div);
          return div;
        };
        return control;
      }

      for (const l of doc.layers) {
        built.push(builders[l.type](l).addTo(map));
      }

      for (const c of doc.controls) {
        if (c.type === "layers") {
          const control = L.control.layers(null, null, { position: c.position });
          doc.layers.forEach((l, i) => control.addOverlay(built[i], l.name));
          control.addTo(map);
        } else if (c.type === "legend") {
          legendControl(c).addTo(map);
        } else if (c.type === "split_map") {
          L.control.sideBySide(built[c.left], built[c.right]).addTo(map);
        } else if (c.type === "basemap_selector" && c.state !== "closed") {
          selectorControl(c).addTo(map);
        }
      }
    })();
  </script>
</body>
</html>
"#;
