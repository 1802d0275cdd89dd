//! JavaScript / TypeScript starters

use crate::domain::entities::{TemplateDefinition, TemplateFile};

pub const NODE: TemplateDefinition = TemplateDefinition::new(
    "node",
    "Node.js",
    &[
        TemplateFile::new(
            "package.json",
            r#"{
  "name": "localx-node-app",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "start": "node index.js"
  }
}
"#,
        ),
        TemplateFile::new("index.js", "console.log('LocalX Node app running');\n"),
    ],
);

pub const REACT: TemplateDefinition = TemplateDefinition::new(
    "react",
    "React (Vite)",
    &[
        TemplateFile::new(
            "package.json",
            r#"{
  "name": "localx-react-app",
  "version": "0.1.0",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.2.0",
    "vite": "^5.0.0"
  }
}
"#,
        ),
        TemplateFile::new(
            "vite.config.js",
            r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
export default defineConfig({ plugins: [react()] })
"#,
        ),
        TemplateFile::new(
            "index.html",
            r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>LocalX React</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#,
        ),
        TemplateFile::new(
            "src/main.jsx",
            r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.jsx'
import './index.css'
ReactDOM.createRoot(document.getElementById('root')).render(<App />)
"#,
        ),
        TemplateFile::new(
            "src/App.jsx",
            r#"export default function App() {
  return (
    <main style={{ fontFamily: 'sans-serif', padding: 24 }}>
      <h1>Hello LocalX React</h1>
    </main>
  )
}
"#,
        ),
        TemplateFile::new("src/index.css", "body { margin: 0; }\n"),
    ],
);

pub const VUE: TemplateDefinition = TemplateDefinition::new(
    "vue",
    "Vue (Vite)",
    &[
        TemplateFile::new(
            "package.json",
            r#"{
  "name": "localx-vue-app",
  "version": "0.1.0",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "vue": "^3.4.0"
  },
  "devDependencies": {
    "@vitejs/plugin-vue": "^5.0.0",
    "vite": "^5.0.0"
  }
}
"#,
        ),
        TemplateFile::new(
            "vite.config.js",
            r#"import { defineConfig } from 'vite'
import vue from '@vitejs/plugin-vue'
export default defineConfig({ plugins: [vue()] })
"#,
        ),
        TemplateFile::new(
            "index.html",
            r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>LocalX Vue</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#,
        ),
        TemplateFile::new(
            "src/main.js",
            r#"import { createApp } from 'vue'
import App from './App.vue'
import './style.css'
createApp(App).mount('#app')
"#,
        ),
        TemplateFile::new(
            "src/App.vue",
            r#"<template>
  <main class="app">
    <h1>Hello LocalX Vue</h1>
  </main>
</template>
<style>
.app { font-family: sans-serif; padding: 24px; }
</style>
"#,
        ),
        TemplateFile::new("src/style.css", "body { margin: 0; }\n"),
    ],
);

pub const NEXT: TemplateDefinition = TemplateDefinition::new(
    "next",
    "Next.js",
    &[
        TemplateFile::new(
            "package.json",
            r#"{
  "name": "localx-next-app",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start"
  },
  "dependencies": {
    "next": "latest",
    "react": "latest",
    "react-dom": "latest"
  }
}
"#,
        ),
        TemplateFile::new(
            "pages/_app.js",
            r#"import '../styles/globals.css'
export default function App({ Component, pageProps }) {
  return <Component {...pageProps} />
}
"#,
        ),
        TemplateFile::new(
            "pages/index.js",
            r#"export default function Home() {
  return (
    <main style={{ fontFamily: 'sans-serif', padding: 24 }}>
      <h1>Hello LocalX Next.js</h1>
    </main>
  )
}
"#,
        ),
        TemplateFile::new("styles/globals.css", "body { margin: 0; }\n"),
    ],
);

pub const SVELTE: TemplateDefinition = TemplateDefinition::new(
    "svelte",
    "Svelte (Vite)",
    &[
        TemplateFile::new(
            "package.json",
            r#"{
  "name": "localx-svelte-app",
  "version": "0.1.0",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "svelte": "^4.2.0"
  },
  "devDependencies": {
    "@sveltejs/vite-plugin-svelte": "^3.0.0",
    "vite": "^5.0.0"
  }
}
"#,
        ),
        TemplateFile::new(
            "vite.config.js",
            r#"import { defineConfig } from 'vite'
import { svelte } from '@sveltejs/vite-plugin-svelte'
export default defineConfig({ plugins: [svelte()] })
"#,
        ),
        TemplateFile::new(
            "index.html",
            r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>LocalX Svelte</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#,
        ),
        TemplateFile::new(
            "src/main.js",
            r#"import App from './App.svelte'
import './app.css'
const app = new App({ target: document.getElementById('app') })
export default app
"#,
        ),
        TemplateFile::new(
            "src/App.svelte",
            r#"<main class='app'>
  <h1>Hello LocalX Svelte</h1>
</main>
<style>
  .app { font-family: sans-serif; padding: 24px; }
</style>
"#,
        ),
        TemplateFile::new("src/app.css", "body { margin: 0; }\n"),
    ],
);

pub const NUXT: TemplateDefinition = TemplateDefinition::new(
    "nuxt",
    "Nuxt",
    &[
        TemplateFile::new(
            "package.json",
            r#"{
  "name": "localx-nuxt-app",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "nuxt dev",
    "build": "nuxt build",
    "start": "nuxt start"
  },
  "dependencies": {
    "nuxt": "latest"
  }
}
"#,
        ),
        TemplateFile::new("nuxt.config.ts", "export default defineNuxtConfig({})\n"),
        TemplateFile::new(
            "app.vue",
            r#"<template>
  <main style="font-family: sans-serif; padding: 24px;">
    <h1>Hello LocalX Nuxt</h1>
  </main>
</template>
"#,
        ),
        TemplateFile::new(
            "pages/index.vue",
            r#"<template>
  <div>Hello LocalX Nuxt</div>
</template>
"#,
        ),
    ],
);

pub const ANGULAR: TemplateDefinition = TemplateDefinition::new(
    "angular",
    "Angular (basic scaffold)",
    &[
        TemplateFile::new(
            "package.json",
            r#"{
  "name": "localx-angular-app",
  "version": "0.0.0",
  "private": true,
  "scripts": {
    "start": "ng serve",
    "build": "ng build"
  },
  "dependencies": {
    "@angular/animations": "^17.3.0",
    "@angular/common": "^17.3.0",
    "@angular/compiler": "^17.3.0",
    "@angular/core": "^17.3.0",
    "@angular/forms": "^17.3.0",
    "@angular/platform-browser": "^17.3.0",
    "@angular/platform-browser-dynamic": "^17.3.0",
    "@angular/router": "^17.3.0",
    "rxjs": "^7.8.1",
    "tslib": "^2.6.2",
    "zone.js": "^0.14.4"
  },
  "devDependencies": {
    "@angular/cli": "^17.3.0",
    "@angular/compiler-cli": "^17.3.0",
    "@types/node": "^20.11.30",
    "typescript": "^5.4.2"
  }
}
"#,
        ),
        TemplateFile::new(
            "angular.json",
            r#"{
  "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
  "version": 1,
  "projects": {
    "localx-angular-app": {
      "projectType": "application",
      "root": "",
      "sourceRoot": "src",
      "prefix": "app",
      "architect": {
        "build": {
          "builder": "@angular-devkit/build-angular:browser",
          "options": {
            "outputPath": "dist/localx-angular-app",
            "index": "src/index.html",
            "main": "src/main.ts",
            "polyfills": [],
            "tsConfig": "tsconfig.app.json",
            "assets": ["src/favicon.ico", "src/assets"],
            "styles": ["src/styles.css"],
            "scripts": []
          }
        },
        "serve": {
          "builder": "@angular-devkit/build-angular:dev-server",
          "options": {
            "buildTarget": "localx-angular-app:build"
          }
        }
      }
    }
  },
  "defaultProject": "localx-angular-app"
}
"#,
        ),
        TemplateFile::new(
            "tsconfig.json",
            r#"{
  "compileOnSave": false,
  "compilerOptions": {
    "baseUrl": "./",
    "outDir": "./dist/out-tsc",
    "sourceMap": true,
    "declaration": false,
    "downlevelIteration": true,
    "experimentalDecorators": true,
    "module": "ES2022",
    "moduleResolution": "node",
    "importHelpers": true,
    "target": "ES2022",
    "typeRoots": ["node_modules/@types"],
    "lib": ["ES2022", "dom"]
  }
}
"#,
        ),
        TemplateFile::new(
            "tsconfig.app.json",
            r#"{
  "extends": "./tsconfig.json",
  "compilerOptions": {
    "outDir": "./dist/out-tsc/app",
    "types": []
  },
  "files": ["src/main.ts"],
  "include": ["src/**/*.d.ts"]
}
"#,
        ),
        TemplateFile::new(
            "src/main.ts",
            r#"import { platformBrowserDynamic } from '@angular/platform-browser-dynamic'
import { AppModule } from './app/app.module'
platformBrowserDynamic().bootstrapModule(AppModule)
"#,
        ),
        TemplateFile::new(
            "src/index.html",
            r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>LocalX Angular</title>
    <base href="/">
    <meta name="viewport" content="width=device-width, initial-scale=1">
  </head>
  <body>
    <app-root></app-root>
  </body>
</html>
"#,
        ),
        TemplateFile::new(
            "src/styles.css",
            "body { margin: 0; font-family: sans-serif; }\n",
        ),
        TemplateFile::new(
            "src/app/app.component.ts",
            r#"import { Component } from '@angular/core'

@Component({
  selector: 'app-root',
  templateUrl: './app.component.html',
  styleUrls: ['./app.component.css']
})
export class AppComponent {}
"#,
        ),
        TemplateFile::new(
            "src/app/app.component.html",
            "<main class=\"app\"><h1>Hello LocalX Angular</h1></main>\n",
        ),
        TemplateFile::new("src/app/app.component.css", ".app { padding: 24px; }\n"),
        TemplateFile::new(
            "src/app/app.module.ts",
            r#"import { NgModule } from '@angular/core'
import { BrowserModule } from '@angular/platform-browser'
import { AppComponent } from './app.component'

@NgModule({
  declarations: [AppComponent],
  imports: [BrowserModule],
  bootstrap: [AppComponent]
})
export class AppModule {}
"#,
        ),
    ],
);
